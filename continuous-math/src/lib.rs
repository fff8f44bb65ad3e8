#![cfg_attr(not(test), no_std)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer (little-endian limbs) for wide intermediates.
    pub struct U256(4);
}

pub mod index_math;
pub mod ln;

pub use index_math::{
    convert_from_basis_points, convert_to_basis_points, divide_down, divide_up, exponent,
    get_continuous_index, multiply_down, multiply_indices_down, multiply_indices_up, multiply_up,
};
pub use ln::wad_ln;

// ============================================================================
// SCALE CONSTANTS
// ============================================================================

/// 12 decimals - scale of the continuous index and of exponent arguments/results
/// Example: 1:1 index = 1_000_000_000_000
pub const EXP_ONE: u128 = 1_000_000_000_000;

/// Basis-point scale (100%)
pub const BP_ONE: u128 = 10_000;

/// 18 decimals - scale used by the natural-log routine
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// WAD / EXP_ONE, the lift between the two scales
pub const WAD_TO_EXP: u128 = 1_000_000;

/// Seconds per year (365 days)
pub const SECONDS_PER_YEAR: u32 = 31_536_000;

/// Math kernel failures. Contract crates map these onto their own error codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    DivisionByZero,
    Overflow,
    InputNotPositive,
}
