use soroban_sdk::{Address, BytesN, Env, contract, contractimpl};

use crate::admin::Admin;
use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::{ApprovedEarnerStorage, EarningStorage, Storage};
use crate::indexing::Indexing;
use crate::token::accounting::Accounting;
use crate::token::allowance::AllowanceStorage;

/// Yield Token Contract
///
/// A fungible token whose supply splits into a non-earning cohort holding
/// face-value balances and an earning cohort holding principal that gains
/// present value as the continuous index grows. The portal mints, burns on
/// behalf of redemptions and feeds the externally computed earner rate into
/// the index; the token itself never calls the rate model.
#[contract]
pub struct YieldTokenContract;

#[contractimpl]
impl YieldTokenContract {
    /// Constructor for the Yield Token
    pub fn __constructor(env: Env, portal: Address, registrar: Address) {
        Admin::initialize(&env, &portal, &registrar);
    }

    // ==================== Admin ====================

    /// Upgrade the contract to new wasm. Portal-only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        Admin::upgrade(&env, new_wasm_hash);
    }

    /// Get the portal address
    pub fn portal(env: Env) -> Address {
        Admin::portal(&env)
    }

    /// Get the registrar this token consults
    pub fn registrar(env: Env) -> Address {
        Storage::get(&env).registrar
    }

    /// Add an address to the approved-earners list. Portal-only.
    pub fn approve_earner(env: Env, account: Address) {
        Admin::approve_earner(&env, &account);
    }

    /// Remove an address from the approved-earners list. Portal-only.
    pub fn disapprove_earner(env: Env, account: Address) {
        Admin::disapprove_earner(&env, &account);
    }

    /// Check if an address may enter the earning cohort
    pub fn is_approved_earner(env: Env, account: Address) -> bool {
        ApprovedEarnerStorage::get(&env, &account)
    }

    // ==================== Index ====================

    /// Advance the index to now at an externally supplied earner rate and
    /// commit it. Portal-only.
    pub fn update_index(env: Env, rate: u32) -> Result<u128, Error> {
        Admin::require_portal(&env);
        let mut storage = Storage::get(&env);
        let index = Indexing::update(&env, &mut storage, rate, env.ledger().timestamp())?;
        Storage::set(&env, &storage);
        Ok(index)
    }

    /// Index value at the current timestamp, without committing
    pub fn current_index(env: Env) -> Result<u128, Error> {
        let storage = Storage::get(&env);
        Indexing::current_index(&storage, env.ledger().timestamp())
    }

    /// Rate the index currently grows at, in basis points
    pub fn latest_rate(env: Env) -> u32 {
        Storage::get(&env).indexing.latest_rate
    }

    // ==================== Supply ====================

    /// Mint present-value tokens to an address. Portal-only.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        Admin::require_portal(&env);
        Accounting::mint(&env, &to, amount)
    }

    /// Burn present-value tokens from the holder
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Accounting::burn(&env, &from, amount)
    }

    /// Get the total supply across both cohorts
    pub fn total_supply(env: Env) -> Result<i128, Error> {
        let storage = Storage::get(&env);
        Accounting::total_supply(&env, &storage)
    }

    /// Present value of the earning cohort
    pub fn total_earning_supply(env: Env) -> Result<i128, Error> {
        let storage = Storage::get(&env);
        Accounting::total_earning_supply(&env, &storage)
    }

    /// Face-value tokens outside the earning cohort
    pub fn total_non_earning_supply(env: Env) -> u128 {
        Storage::get(&env).total_non_earning_supply
    }

    /// Sum of principal across all earning accounts
    pub fn principal_of_earning_supply(env: Env) -> u128 {
        Storage::get(&env).principal_of_earning_supply
    }

    // ==================== Token ====================

    /// Present-value balance of an address
    pub fn balance(env: Env, id: Address) -> Result<i128, Error> {
        Accounting::balance(&env, &id)
    }

    /// Stored principal of an address; 0 outside the earning cohort
    pub fn principal_balance(env: Env, id: Address) -> u128 {
        EarningStorage::principal(&env, &id)
    }

    /// Check if an address is in the earning cohort
    pub fn is_earning(env: Env, id: Address) -> bool {
        EarningStorage::is_earning(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Accounting::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        AllowanceStorage::spend(&env, &from, &spender, amount)?;
        Accounting::transfer(&env, &from, &to, amount)
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, live_until_ledger: u32) {
        from.require_auth();
        AllowanceStorage::set(&env, &from, &spender, amount, live_until_ledger);
        Events::approve(&env, &from, &spender, amount, live_until_ledger);
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        let allowance = AllowanceStorage::get(&env, &from, &spender);
        if AllowanceStorage::is_live(&env, &allowance) {
            allowance.amount
        } else {
            0
        }
    }

    // ==================== Earning ====================

    /// Enter the earning cohort, converting the caller's face-value balance
    /// to principal at the current index
    pub fn start_earning(env: Env, account: Address) -> Result<(), Error> {
        account.require_auth();
        Accounting::start_earning(&env, &account)
    }

    /// Leave the earning cohort, realizing the account's present value.
    /// Returns `(present_amount, principal)`.
    pub fn stop_earning(env: Env, account: Address) -> Result<(i128, u128), Error> {
        account.require_auth();
        Accounting::stop_earning(&env, &account)
    }

    /// Stop earning on behalf of an address that is no longer approved
    pub fn stop_earning_for(env: Env, account: Address) -> Result<(i128, u128), Error> {
        if ApprovedEarnerStorage::get(&env, &account) {
            return Err(Error::IsApprovedEarner);
        }
        Accounting::stop_earning(&env, &account)
    }

    /// Realize the interest accrued since the last claim
    pub fn claim(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        Accounting::claim(&env, &account)
    }
}
