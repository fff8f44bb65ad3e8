use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{
    DataKey, EarningAccount, INSTANCE_BUMP, INSTANCE_TTL, STORAGE, TokenStorage,
};

/// Aggregate token-state storage operations
pub struct Storage;

impl Storage {
    /// Extend instance storage TTL if needed
    pub fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL, INSTANCE_BUMP);
    }

    /// Get the token storage
    pub fn get(env: &Env) -> TokenStorage {
        Self::extend_instance_ttl(env);
        env.storage()
            .instance()
            .get(&STORAGE)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    /// Set the token storage
    pub fn set(env: &Env, storage: &TokenStorage) {
        env.storage().instance().set(&STORAGE, storage);
        Self::extend_instance_ttl(env);
    }

    /// Check if the token is initialized
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&STORAGE)
    }
}

/// Non-earning balance storage operations
pub struct BalanceStorage;

impl BalanceStorage {
    pub fn get(env: &Env, id: &Address) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    pub fn set(env: &Env, id: &Address, amount: u128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
    }

    pub fn add(env: &Env, id: &Address, amount: u128) {
        let balance = Self::get(env, id);
        let new_balance = balance
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(env, Error::ArithmeticError));
        Self::set(env, id, new_balance);
    }

    pub fn subtract(env: &Env, id: &Address, amount: u128) {
        let balance = Self::get(env, id);
        if balance < amount {
            panic_with_error!(env, Error::InsufficientBalance);
        }
        Self::set(env, id, balance - amount);
    }
}

/// Earning-account storage operations
pub struct EarningStorage;

impl EarningStorage {
    pub fn get(env: &Env, id: &Address) -> Option<EarningAccount> {
        let key = DataKey::Earning(id.clone());
        let account: Option<EarningAccount> = env.storage().persistent().get(&key);
        if account.is_some() {
            let ttl = env.storage().max_ttl();
            env.storage().persistent().extend_ttl(&key, ttl, ttl);
        }
        account
    }

    pub fn set(env: &Env, id: &Address, account: &EarningAccount) {
        let key = DataKey::Earning(id.clone());
        env.storage().persistent().set(&key, account);
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
    }

    pub fn remove(env: &Env, id: &Address) {
        env.storage().persistent().remove(&DataKey::Earning(id.clone()));
    }

    pub fn is_earning(env: &Env, id: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Earning(id.clone()))
    }

    /// Stored principal; 0 for addresses outside the earning cohort
    pub fn principal(env: &Env, id: &Address) -> u128 {
        Self::get(env, id).map_or(0, |account| account.principal)
    }
}

/// Approved-earner flag storage operations
pub struct ApprovedEarnerStorage;

impl ApprovedEarnerStorage {
    pub fn get(env: &Env, id: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::ApprovedEarner(id.clone()))
            .unwrap_or_default()
    }

    pub fn set(env: &Env, id: &Address, approved: bool) {
        let key = DataKey::ApprovedEarner(id.clone());
        env.storage().persistent().set(&key, &approved);
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
    }
}
