use continuous_math::{
    U256, convert_from_basis_points, divide_down, divide_up, get_continuous_index, multiply_down,
    multiply_indices_down,
};
use soroban_sdk::Env;

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::types::TokenStorage;

/// Continuous-indexing state machine and the principal/present conversion
/// discipline used by every balance-touching operation.
///
/// Rounding always favors the protocol: principal credited from a present
/// amount rounds down, principal debited rounds up, and present value read
/// from principal rounds down.
pub struct Indexing;

impl Indexing {
    /// Advance the index to `now` and commit it together with `new_rate`.
    /// Idempotent when neither the timestamp nor the rate moved.
    pub fn update(
        env: &Env,
        storage: &mut TokenStorage,
        new_rate: u32,
        now: u64,
    ) -> Result<u128, Error> {
        let indexing = &mut storage.indexing;
        if now == indexing.latest_update_timestamp && new_rate == indexing.latest_rate {
            return Ok(indexing.latest_index);
        }

        let new_index = Self::calculate_current_index(
            indexing.latest_index,
            indexing.latest_rate,
            indexing.latest_update_timestamp,
            now,
        )?;

        indexing.latest_index = new_index;
        indexing.latest_rate = new_rate;
        indexing.latest_update_timestamp = now;

        Events::index_updated(env, new_index, new_rate);
        Ok(new_index)
    }

    /// Commit the index at the stored rate. Conversion-bearing operations
    /// call this before converting.
    pub fn refresh(env: &Env, storage: &mut TokenStorage, now: u64) -> Result<u128, Error> {
        let rate = storage.indexing.latest_rate;
        Self::update(env, storage, rate, now)
    }

    /// Index value at `now` without committing.
    pub fn current_index(storage: &TokenStorage, now: u64) -> Result<u128, Error> {
        let indexing = &storage.indexing;
        Self::calculate_current_index(
            indexing.latest_index,
            indexing.latest_rate,
            indexing.latest_update_timestamp,
            now,
        )
    }

    fn calculate_current_index(
        latest_index: u128,
        latest_rate: u32,
        latest_update_timestamp: u64,
        now: u64,
    ) -> Result<u128, Error> {
        if now < latest_update_timestamp {
            return Err(Error::NegativeTimeElapsed);
        }
        let elapsed = now - latest_update_timestamp;
        if elapsed == 0 {
            return Ok(latest_index);
        }

        let rate_scaled = convert_from_basis_points(latest_rate);
        // elapsed saturates at the 32-bit envelope (136 years)
        let delta_index = get_continuous_index(rate_scaled, elapsed.min(u32::MAX as u64) as u32);
        let grown = multiply_indices_down(latest_index, delta_index);

        // cap at the 128-bit index envelope
        Ok(grown.min(U256::from(u128::MAX)).low_u128())
    }

    // ========== Principal <-> present conversions ==========

    /// Principal credited for a present amount (rounds down)
    pub fn principal_from_present_down(present: u128, index: u128) -> Result<u128, Error> {
        divide_down(U256::from(present), index).map_err(Error::from)
    }

    /// Principal debited for a present amount (rounds up)
    pub fn principal_from_present_up(present: u128, index: u128) -> Result<u128, Error> {
        divide_up(U256::from(present), index).map_err(Error::from)
    }

    /// Present value of a principal (rounds down)
    pub fn present_from_principal_down(principal: u128, index: u128) -> Result<u128, Error> {
        let present = multiply_down(principal, index);
        if present.bits() > 128 {
            return Err(Error::ArithmeticError);
        }
        Ok(present.low_u128())
    }
}
