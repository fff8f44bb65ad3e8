use soroban_sdk::{Address, Symbol, contracttype};

pub use continuous_math::{BP_ONE, EXP_ONE};

// ============================================================================
// TTL CONSTANTS
// ============================================================================

/// Ledgers per day (~5 seconds per ledger on Stellar)
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (token aggregates, portal) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

// ============================================================================
// CONTINUOUS INDEXING
// ============================================================================

/// Time-varying accumulator driving the earning cohort.
///
/// Present value of a principal `p` is `p * latest_index / EXP_ONE` once the
/// index is advanced to the current timestamp.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContinuousIndexing {
    /// Accumulated index (EXP_ONE scale); at least EXP_ONE, non-decreasing
    pub latest_index: u128,

    /// Yearly rate in basis points the index grows at since the last commit
    pub latest_rate: u32,

    /// Timestamp of the last commit
    pub latest_update_timestamp: u64,
}

impl ContinuousIndexing {
    /// Fresh accumulator at a 1:1 index and a zero rate
    pub fn new(timestamp: u64) -> Self {
        Self {
            latest_index: EXP_ONE,
            latest_rate: 0,
            latest_update_timestamp: timestamp,
        }
    }
}

// ============================================================================
// EARNING ACCOUNT
// ============================================================================

/// Cohort record; exists iff the address is earning
#[contracttype]
#[derive(Clone, Debug)]
pub struct EarningAccount {
    /// Stored principal; grows in present value as the index grows
    pub principal: u128,

    /// Index at which the holder last realized interest
    pub last_claim_index: u128,
}

// ============================================================================
// TOKEN STATE
// ============================================================================

/// Aggregate token state
///
/// Per-address entries (non-earning balances, earning accounts, allowances,
/// approved-earner flags) live in persistent storage; everything here is
/// bounded in size.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenStorage {
    /// Portal allowed to mint and to drive the index
    pub portal: Address,

    /// Registrar this token's parameters are validated against
    pub registrar: Address,

    /// Present-value tokens held outside the earning cohort
    pub total_non_earning_supply: u128,

    /// Sum of principal across all earning accounts
    pub principal_of_earning_supply: u128,

    pub indexing: ContinuousIndexing,
}

// ============================================================================
// ALLOWANCES
// ============================================================================

/// Allowance value and expiry ledger (0 = no expiry)
#[contracttype]
#[derive(Clone, Debug)]
pub struct Allowance {
    pub amount: i128,
    pub live_until_ledger: u32,
}

/// (from, spender) pair keying an allowance
#[contracttype]
#[derive(Clone, Debug)]
pub struct Txn(pub Address, pub Address);

// ============================================================================
// STORAGE KEYS
// ============================================================================

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Non-earning present balance
    Balance(Address),
    /// Earning-cohort record
    Earning(Address),
    Allowance(Txn),
    ApprovedEarner(Address),
}

pub use soroban_sdk::symbol_short;

pub const STORAGE: Symbol = symbol_short!("STORAGE");
