use soroban_sdk::{Address, BytesN, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::storage::{ApprovedEarnerStorage, Storage};
use crate::common::types::{ContinuousIndexing, TokenStorage};

/// Administrative functions for the token contract
pub struct Admin;

impl Admin {
    /// Initialize the token state (used in constructor)
    pub fn initialize(env: &Env, portal: &Address, registrar: &Address) {
        if Storage::is_initialized(env) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }
        let storage = TokenStorage {
            portal: portal.clone(),
            registrar: registrar.clone(),
            total_non_earning_supply: 0,
            principal_of_earning_supply: 0,
            indexing: ContinuousIndexing::new(env.ledger().timestamp()),
        };
        Storage::set(env, &storage);
    }

    /// Get the portal address
    pub fn portal(env: &Env) -> Address {
        Storage::get(env).portal
    }

    /// Require portal authorization
    pub fn require_portal(env: &Env) {
        let portal = Self::portal(env);
        portal.require_auth();
    }

    /// Upgrade the contract to new wasm. Portal-only.
    pub fn upgrade(env: &Env, new_wasm_hash: BytesN<32>) {
        Self::require_portal(env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    /// Add an address to the approved-earners list. Portal-only.
    pub fn approve_earner(env: &Env, account: &Address) {
        Self::require_portal(env);
        ApprovedEarnerStorage::set(env, account, true);
    }

    /// Remove an address from the approved-earners list. Portal-only.
    /// The account keeps earning until someone stops it.
    pub fn disapprove_earner(env: &Env, account: &Address) {
        Self::require_portal(env);
        ApprovedEarnerStorage::set(env, account, false);
    }
}
