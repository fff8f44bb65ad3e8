use soroban_sdk::{Address, Env};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::{ApprovedEarnerStorage, BalanceStorage, EarningStorage, Storage};
use crate::common::types::{EarningAccount, TokenStorage};
use crate::indexing::Indexing;

/// Token accounting across the two cohorts
///
/// Non-earning holders carry face-value balances; earning holders carry a
/// principal whose present value is `principal * index / EXP_ONE`. Every
/// operation below keeps `total_supply = total_non_earning_supply +
/// present(principal_of_earning_supply)` closed, with the fractional
/// remainder of each conversion staying with the protocol.
pub struct Accounting;

impl Accounting {
    /// Create `amount` present-value tokens for `to`.
    pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let amount = as_amount(amount)?;
        if *to == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        let mut storage = Storage::get(env);
        let now = env.ledger().timestamp();

        match EarningStorage::get(env, to) {
            Some(mut account) => {
                let index = Indexing::refresh(env, &mut storage, now)?;
                let principal = Indexing::principal_from_present_down(amount, index)?;
                account.principal = account
                    .principal
                    .checked_add(principal)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                storage.principal_of_earning_supply = storage
                    .principal_of_earning_supply
                    .checked_add(principal)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                EarningStorage::set(env, to, &account);
            }
            None => {
                if storage.principal_of_earning_supply > 0 {
                    Indexing::refresh(env, &mut storage, now)?;
                }
                storage.total_non_earning_supply = storage
                    .total_non_earning_supply
                    .checked_add(amount)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                BalanceStorage::add(env, to, amount);
            }
        }

        Storage::set(env, &storage);
        Events::mint(env, to, amount as i128);
        Ok(())
    }

    /// Destroy `amount` present-value tokens held by `from`.
    pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let amount = as_amount(amount)?;
        let mut storage = Storage::get(env);
        let now = env.ledger().timestamp();

        match EarningStorage::get(env, from) {
            Some(mut account) => {
                let index = Indexing::refresh(env, &mut storage, now)?;
                let principal = Indexing::principal_from_present_up(amount, index)?;
                if account.principal < principal {
                    return Err(Error::InsufficientBalance);
                }
                account.principal -= principal;
                storage.principal_of_earning_supply = storage
                    .principal_of_earning_supply
                    .checked_sub(principal)
                    .ok_or(Error::ArithmeticError)?;
                EarningStorage::set(env, from, &account);
            }
            None => {
                if BalanceStorage::get(env, from) < amount {
                    return Err(Error::InsufficientBalance);
                }
                BalanceStorage::subtract(env, from, amount);
                storage.total_non_earning_supply = storage
                    .total_non_earning_supply
                    .checked_sub(amount)
                    .ok_or(Error::ArithmeticError)?;
            }
        }

        Storage::set(env, &storage);
        Events::burn(env, from, amount as i128);
        Ok(())
    }

    /// Move `amount` present-value tokens, converting at the debiting side
    /// rounded up and the crediting side rounded down whenever a cohort
    /// boundary is crossed.
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let amount = as_amount(amount)?;
        if *to == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        let mut storage = Storage::get(env);
        let now = env.ledger().timestamp();

        match (EarningStorage::get(env, from), EarningStorage::get(env, to)) {
            (None, None) => {
                // in-kind move; totals and index untouched
                if BalanceStorage::get(env, from) < amount {
                    return Err(Error::InsufficientBalance);
                }
                BalanceStorage::subtract(env, from, amount);
                BalanceStorage::add(env, to, amount);
            }
            (Some(mut sender), Some(mut receiver)) => {
                // in-kind principal move preserves the earning total exactly;
                // no cohort boundary is crossed, so the index is read, not
                // committed
                let index = Indexing::current_index(&storage, now)?;
                let principal = Indexing::principal_from_present_up(amount, index)?;
                if sender.principal < principal {
                    return Err(Error::InsufficientBalance);
                }
                if from != to {
                    sender.principal -= principal;
                    receiver.principal = receiver
                        .principal
                        .checked_add(principal)
                        .ok_or(Error::ArithmeticError)?;
                    EarningStorage::set(env, from, &sender);
                    EarningStorage::set(env, to, &receiver);
                }
            }
            (Some(mut sender), None) => {
                let index = Indexing::refresh(env, &mut storage, now)?;
                let principal = Indexing::principal_from_present_up(amount, index)?;
                if sender.principal < principal {
                    return Err(Error::InsufficientBalance);
                }
                sender.principal -= principal;
                storage.principal_of_earning_supply = storage
                    .principal_of_earning_supply
                    .checked_sub(principal)
                    .ok_or(Error::ArithmeticError)?;
                storage.total_non_earning_supply = storage
                    .total_non_earning_supply
                    .checked_add(amount)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                EarningStorage::set(env, from, &sender);
                BalanceStorage::add(env, to, amount);
            }
            (None, Some(mut receiver)) => {
                if BalanceStorage::get(env, from) < amount {
                    return Err(Error::InsufficientBalance);
                }
                let index = Indexing::refresh(env, &mut storage, now)?;
                let principal = Indexing::principal_from_present_down(amount, index)?;
                BalanceStorage::subtract(env, from, amount);
                storage.total_non_earning_supply = storage
                    .total_non_earning_supply
                    .checked_sub(amount)
                    .ok_or(Error::ArithmeticError)?;
                receiver.principal = receiver
                    .principal
                    .checked_add(principal)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                storage.principal_of_earning_supply = storage
                    .principal_of_earning_supply
                    .checked_add(principal)
                    .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
                EarningStorage::set(env, to, &receiver);
            }
        }

        Storage::set(env, &storage);
        Events::transfer(env, from, to, amount as i128);
        Ok(())
    }

    /// Move `account`'s face-value balance into the earning cohort.
    /// No-op when already earning.
    pub fn start_earning(env: &Env, account: &Address) -> Result<(), Error> {
        if !ApprovedEarnerStorage::get(env, account) {
            return Err(Error::NotApprovedEarner);
        }
        if EarningStorage::is_earning(env, account) {
            return Ok(());
        }

        let mut storage = Storage::get(env);
        let now = env.ledger().timestamp();
        let index = Indexing::refresh(env, &mut storage, now)?;

        let balance = BalanceStorage::get(env, account);
        let principal = Indexing::principal_from_present_down(balance, index)?;

        BalanceStorage::set(env, account, 0);
        storage.total_non_earning_supply = storage
            .total_non_earning_supply
            .checked_sub(balance)
            .ok_or(Error::ArithmeticError)?;
        storage.principal_of_earning_supply = storage
            .principal_of_earning_supply
            .checked_add(principal)
            .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
        EarningStorage::set(
            env,
            account,
            &EarningAccount {
                principal,
                last_claim_index: index,
            },
        );

        Storage::set(env, &storage);
        Events::started_earning(env, account);
        Ok(())
    }

    /// Move `account` back to the non-earning cohort, realizing its present
    /// value. Returns `(present_amount, principal)`; no-op when not earning.
    pub fn stop_earning(env: &Env, account: &Address) -> Result<(i128, u128), Error> {
        let Some(earning) = EarningStorage::get(env, account) else {
            return Ok((0, 0));
        };

        let mut storage = Storage::get(env);
        let now = env.ledger().timestamp();
        let index = Indexing::refresh(env, &mut storage, now)?;

        let principal = earning.principal;
        let present = Indexing::present_from_principal_down(principal, index)?;

        EarningStorage::remove(env, account);
        storage.principal_of_earning_supply = storage
            .principal_of_earning_supply
            .checked_sub(principal)
            .ok_or(Error::ArithmeticError)?;
        storage.total_non_earning_supply = storage
            .total_non_earning_supply
            .checked_add(present)
            .ok_or(Error::OverflowsPrincipalOfTotalSupply)?;
        BalanceStorage::add(env, account, present);

        Storage::set(env, &storage);
        Events::stopped_earning(env, account);
        Ok((as_i128(present)?, principal))
    }

    /// Realize the interest accrued since the last claim. The principal is
    /// left untouched; only the claim watermark moves, against the index
    /// read at `now`.
    pub fn claim(env: &Env, account: &Address) -> Result<i128, Error> {
        let Some(mut earning) = EarningStorage::get(env, account) else {
            return Ok(0);
        };

        let storage = Storage::get(env);
        let now = env.ledger().timestamp();
        let index = Indexing::current_index(&storage, now)?;

        let current = Indexing::present_from_principal_down(earning.principal, index)?;
        let at_last_claim =
            Indexing::present_from_principal_down(earning.principal, earning.last_claim_index)?;
        let interest = current.saturating_sub(at_last_claim);

        earning.last_claim_index = index;
        EarningStorage::set(env, account, &earning);

        as_i128(interest)
    }

    // ========== Views ==========

    /// Present-value balance: face value for the non-earning cohort, the
    /// present value of the stored principal for earners.
    pub fn balance(env: &Env, id: &Address) -> Result<i128, Error> {
        let now = env.ledger().timestamp();
        match EarningStorage::get(env, id) {
            Some(earning) => {
                let storage = Storage::get(env);
                let index = Indexing::current_index(&storage, now)?;
                as_i128(Indexing::present_from_principal_down(earning.principal, index)?)
            }
            None => as_i128(BalanceStorage::get(env, id)),
        }
    }

    pub fn total_earning_supply(env: &Env, storage: &TokenStorage) -> Result<i128, Error> {
        let now = env.ledger().timestamp();
        let index = Indexing::current_index(storage, now)?;
        as_i128(Indexing::present_from_principal_down(
            storage.principal_of_earning_supply,
            index,
        )?)
    }

    pub fn total_supply(env: &Env, storage: &TokenStorage) -> Result<i128, Error> {
        let earning = Self::total_earning_supply(env, storage)?;
        let non_earning = as_i128(storage.total_non_earning_supply)?;
        non_earning.checked_add(earning).ok_or(Error::ArithmeticError)
    }
}

fn as_amount(amount: i128) -> Result<u128, Error> {
    if amount <= 0 {
        return Err(Error::InsufficientAmount);
    }
    Ok(amount as u128)
}

fn as_i128(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticError)
}
