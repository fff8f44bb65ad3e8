use soroban_sdk::{Address, Env};

use crate::common::error::Error;
use crate::common::types::{Allowance, DataKey, Txn};

/// Spending allowances over present-value amounts
///
/// Allowances are face-value quantities regardless of the owner's cohort;
/// the principal conversion happens later, inside the transfer itself. An
/// allowance with `live_until_ledger == 0` never expires.
pub struct AllowanceStorage;

impl AllowanceStorage {
    pub fn get(env: &Env, from: &Address, spender: &Address) -> Allowance {
        env.storage()
            .persistent()
            .get(&DataKey::Allowance(Txn(from.clone(), spender.clone())))
            .unwrap_or(Allowance {
                amount: 0,
                live_until_ledger: 0,
            })
    }

    pub fn set(env: &Env, from: &Address, spender: &Address, amount: i128, live_until_ledger: u32) {
        let key = DataKey::Allowance(Txn(from.clone(), spender.clone()));
        env.storage().persistent().set(
            &key,
            &Allowance {
                amount,
                live_until_ledger,
            },
        );
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
    }

    /// Consume `amount` of the spender's allowance ahead of a transfer.
    pub fn spend(env: &Env, from: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
        let allowance = Self::get(env, from, spender);
        if !Self::is_live(env, &allowance) || allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        let remaining = allowance
            .amount
            .checked_sub(amount)
            .ok_or(Error::ArithmeticError)?;
        Self::set(env, from, spender, remaining, allowance.live_until_ledger);
        Ok(())
    }

    /// An allowance is live until its expiry ledger passes; 0 means no expiry.
    pub fn is_live(env: &Env, allowance: &Allowance) -> bool {
        allowance.live_until_ledger == 0 || allowance.live_until_ledger >= env.ledger().sequence()
    }
}
