use soroban_sdk::{Address, BytesN, Env, Map, Symbol, contract, contractimpl, symbol_short};

use crate::{
    BASE_MINTER_RATE_KEY, DEFAULT_BASE_MINTER_RATE, DEFAULT_MAX_EARNER_RATE, MAX_EARNER_RATE_KEY,
};

const PARAMS: Symbol = symbol_short!("PARAMS");
const ADMIN_KEY: Symbol = symbol_short!("ADMIN");

/// Ledgers per day (~5 seconds per ledger on Stellar)
const ONE_DAY_LEDGERS: u32 = 17280;

const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

/// Registrar Contract
///
/// Keyed parameter store. Values are basis-point quantities set by
/// governance; consumers read them through `get`, which serves a built-in
/// default for the two rate keys and 0 for anything unknown.
#[contract]
pub struct Registrar;

#[contractimpl]
impl Registrar {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&ADMIN_KEY, &admin);
        env.storage()
            .instance()
            .set(&PARAMS, &Map::<Symbol, i128>::new(&env));
    }

    /// Upgrade the contract to new wasm. Admin-only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        Self::require_admin(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    /// Get the admin address
    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&ADMIN_KEY)
            .expect("Admin must be set")
    }

    /// Set a parameter. Admin-only.
    pub fn set(env: Env, key: Symbol, value: i128) {
        Self::require_admin(&env);
        let mut params = Self::params(&env);
        params.set(key, value);
        env.storage().instance().set(&PARAMS, &params);
        Self::extend_instance_ttl(&env);
    }

    /// Stored value for `key`; the built-in default for an unset rate key;
    /// 0 for unknown keys.
    pub fn get(env: Env, key: Symbol) -> i128 {
        if let Some(value) = Self::params(&env).get(key.clone()) {
            return value;
        }
        if key == Symbol::new(&env, MAX_EARNER_RATE_KEY) {
            return DEFAULT_MAX_EARNER_RATE;
        }
        if key == Symbol::new(&env, BASE_MINTER_RATE_KEY) {
            return DEFAULT_BASE_MINTER_RATE;
        }
        0
    }

    fn params(env: &Env) -> Map<Symbol, i128> {
        env.storage()
            .instance()
            .get(&PARAMS)
            .unwrap_or_else(|| Map::new(env))
    }

    fn require_admin(env: &Env) {
        let admin = Self::admin(env.clone());
        admin.require_auth();
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_BUMP);
    }
}
