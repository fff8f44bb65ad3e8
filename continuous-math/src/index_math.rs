use crate::{BP_ONE, EXP_ONE, MathError, SECONDS_PER_YEAR, U256};

/// Floor of `x * EXP_ONE / index`, computed in 256-bit space.
pub fn divide_down(x: U256, index: u128) -> Result<u128, MathError> {
    if index == 0 {
        return Err(MathError::DivisionByZero);
    }
    to_u128(x * U256::from(EXP_ONE) / U256::from(index))
}

/// Ceiling of `x * EXP_ONE / index`, computed in 256-bit space.
pub fn divide_up(x: U256, index: u128) -> Result<u128, MathError> {
    if index == 0 {
        return Err(MathError::DivisionByZero);
    }
    let index = U256::from(index);
    to_u128((x * U256::from(EXP_ONE) + index - U256::one()) / index)
}

/// Floor of `x * index / EXP_ONE`.
pub fn multiply_down(x: u128, index: u128) -> U256 {
    U256::from(x) * U256::from(index) / U256::from(EXP_ONE)
}

/// Ceiling of `x * index / EXP_ONE`.
pub fn multiply_up(x: u128, index: u128) -> U256 {
    let one = U256::from(EXP_ONE);
    (U256::from(x) * U256::from(index) + one - U256::one()) / one
}

/// Floor of `x * delta_index / EXP_ONE`, the delta index being a 64-bit
/// growth factor in the same scale.
pub fn multiply_indices_down(x: u128, delta_index: u64) -> U256 {
    U256::from(x) * U256::from(delta_index) / U256::from(EXP_ONE)
}

/// Ceiling of `x * delta_index / EXP_ONE`.
pub fn multiply_indices_up(x: u128, delta_index: u64) -> U256 {
    let one = U256::from(EXP_ONE);
    (U256::from(x) * U256::from(delta_index) + one - U256::one()) / one
}

/// `e^x` for `x` scaled by EXP_ONE, result scaled by EXP_ONE, via the
/// rational (4,4) Pade approximation
///
/// ```text
/// e(x) = (1 + x/2 + 3x^2/28 + x^3/84 + x^4/1680)
///      / (1 - x/2 + 3x^2/28 - x^3/84 + x^4/1680)
/// ```
///
/// with both sides carried at a shared scaling factor of `84e27`. Monotone
/// non-decreasing up to `x = 6_101_171_897_009` (about e^6.1); past that the
/// rational folds back, so callers keep arguments below the fold.
pub fn exponent(x: u128) -> u64 {
    let x = U256::from(x);
    let x2 = x * x;

    // even-degree terms, scaled by 84e27
    let additive_terms = U256::from(84_000_000_000_000_000_000_000_000_000u128)
        + U256::from(9_000u64) * x2
        + (x2 / U256::from(200_000_000_000u64)) * (x2 / U256::from(100_000_000_000u64));

    // magnitude of the odd-degree terms, same scale
    let different_terms = x * (U256::from(42_000_000_000_000_000u64) + x2 / U256::from(1_000_000_000u64));

    ((additive_terms + different_terms) * U256::from(EXP_ONE) / (additive_terms - different_terms))
        .low_u64()
}

/// `e^(rate * t)` for a yearly rate scaled by EXP_ONE and an elapsed time in
/// seconds, result scaled by EXP_ONE.
pub fn get_continuous_index(yearly_rate_scaled: u64, seconds: u32) -> u64 {
    exponent(yearly_rate_scaled as u128 * seconds as u128 / SECONDS_PER_YEAR as u128)
}

/// Lift a basis-point rate to EXP_ONE scale.
pub fn convert_from_basis_points(bp: u32) -> u64 {
    (bp as u128 * EXP_ONE / BP_ONE) as u64
}

/// Drop an EXP_ONE-scaled rate to basis points.
pub fn convert_to_basis_points(scaled: u64) -> u64 {
    (scaled as u128 * BP_ONE / EXP_ONE) as u64
}

fn to_u128(x: U256) -> Result<u128, MathError> {
    if x.bits() > 128 {
        return Err(MathError::Overflow);
    }
    Ok(x.low_u128())
}
