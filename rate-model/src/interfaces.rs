use soroban_sdk::{Address, Env, Symbol, contractclient};

/// Parameter-store surface the rate models read.
#[contractclient(name = "RegistrarClient")]
pub trait RegistrarInterface {
    /// Stored value for `key`; 0 for unknown keys.
    fn get(env: Env, key: Symbol) -> i128;
}

/// Values the minter gateway reports.
#[contractclient(name = "MinterGatewayClient")]
pub trait MinterGatewayInterface {
    /// Rate at which outstanding minter debt compounds, in basis points.
    fn minter_rate(env: Env) -> u32;

    /// Present value owed across all active minters.
    fn total_active_owed(env: Env) -> i128;
}

/// Token totals the earner-rate model consumes.
#[contractclient(name = "TokenClient")]
pub trait TokenInterface {
    /// Registrar the token validates its parameters against.
    fn registrar(env: Env) -> Address;

    /// Present value of the earning cohort.
    fn total_earning_supply(env: Env) -> i128;
}
