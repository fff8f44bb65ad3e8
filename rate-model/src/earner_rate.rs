use continuous_math::{
    BP_ONE, EXP_ONE, MathError, SECONDS_PER_YEAR, U256, WAD_TO_EXP, convert_from_basis_points,
    convert_to_basis_points, get_continuous_index, wad_ln,
};

/// Look-ahead horizon over which the earner rate is proven safe (30 days)
pub const RATE_CONFIDENCE_WINDOW: u32 = 2_592_000;

/// Safety haircut applied on top of the safe rate (98% in bp)
pub const RATE_SAFETY_MULTIPLIER: u128 = 9_800;

/// Earner rate in basis points: the registrar cap, unless the safety
/// calculation binds first.
pub fn rate(
    max_rate: u128,
    minter_rate: u32,
    total_active_owed: u128,
    total_earning_supply: u128,
) -> Result<u32, MathError> {
    if total_active_owed == 0 || minter_rate == 0 {
        return Ok(0);
    }

    // the cap is already safe: minters owe at least the earning supply and
    // pay at least the capped rate
    if max_rate <= minter_rate as u128 && total_active_owed >= total_earning_supply {
        return Ok(max_rate as u32);
    }

    let capped = extra_safe_earner_rate(total_active_owed, total_earning_supply, minter_rate)?;
    Ok(max_rate.min(capped as u128) as u32)
}

/// The safe rate with the safety haircut applied.
pub fn extra_safe_earner_rate(
    total_active_owed: u128,
    total_earning_supply: u128,
    minter_rate: u32,
) -> Result<u32, MathError> {
    let safe = safe_earner_rate(total_active_owed, total_earning_supply, minter_rate)? as u128;
    Ok((safe * RATE_SAFETY_MULTIPLIER / BP_ONE).min(u32::MAX as u128) as u32)
}

/// Largest earner rate `re` with
/// `E * e^(re * W / Y) <= A * e^(m * W / Y)` over the confidence window `W`,
/// i.e. `re = (Y / W) * ln(1 + A * (e^(m * W / Y) - 1) / E)`.
pub fn safe_earner_rate(
    total_active_owed: u128,
    total_earning_supply: u128,
    minter_rate: u32,
) -> Result<u32, MathError> {
    if total_active_owed == 0 || minter_rate == 0 {
        return Ok(0);
    }
    if total_earning_supply == 0 {
        return Ok(u32::MAX);
    }

    if total_active_owed <= total_earning_supply {
        // instantaneous proportional rate is already safe
        let rate = U256::from(total_active_owed) * U256::from(minter_rate)
            / U256::from(total_earning_supply);
        return Ok(rate.min(U256::from(u32::MAX)).low_u32());
    }

    // what the minter index grows by over the window
    let minter_rate_scaled = convert_from_basis_points(minter_rate);
    let delta_index = get_continuous_index(minter_rate_scaled, RATE_CONFIDENCE_WINDOW);
    let growth = U256::from(delta_index as u128 - EXP_ONE);

    let arg_exp = U256::from(EXP_ONE)
        + U256::from(total_active_owed) * growth / U256::from(total_earning_supply);
    let arg_wad = arg_exp * U256::from(WAD_TO_EXP);
    if arg_wad.bits() > 128 {
        // the lift alone exceeds u128; the annualization clamp below would
        // saturate anyway
        return Ok(u32::MAX);
    }

    let ln_wad = wad_ln(arg_wad.low_u128())?;
    // arg_wad >= WAD here, so the log is non-negative unless the kernel broke
    if ln_wad < 0 {
        return Err(MathError::Overflow);
    }
    let ln_exp = ln_wad as u128 / WAD_TO_EXP;

    let annualized = ln_exp * SECONDS_PER_YEAR as u128 / RATE_CONFIDENCE_WINDOW as u128;
    if annualized > u64::MAX as u128 {
        return Ok(u32::MAX);
    }
    Ok((convert_to_basis_points(annualized as u64) as u128).min(u32::MAX as u128) as u32)
}
