#![no_std]

pub mod contract;

pub use contract::{Registrar, RegistrarClient};

/// Key read by the earner-rate model: hard cap on the earner rate (basis points).
pub const MAX_EARNER_RATE_KEY: &str = "max_earner_rate";

/// Key read by the minter-rate model: base minter rate (basis points).
pub const BASE_MINTER_RATE_KEY: &str = "base_minter_rate";

/// Value served for `max_earner_rate` while unset (10%).
pub const DEFAULT_MAX_EARNER_RATE: i128 = 1_000;

/// Value served for `base_minter_rate` while unset (5%).
pub const DEFAULT_BASE_MINTER_RATE: i128 = 500;
