/// Hard ceiling on the minter rate (400% in bp)
pub const MAX_MINTER_RATE: u32 = 40_000;

/// Minter rate in basis points: the registrar's base rate under the ceiling.
pub fn minter_rate(base_rate: u128) -> u32 {
    base_rate.min(MAX_MINTER_RATE as u128) as u32
}
