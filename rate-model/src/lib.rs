#![no_std]

pub mod contract;
pub mod earner_rate;
pub mod error;
pub mod interfaces;
pub mod minter_rate;

pub use contract::{RateModelContract, RateModelContractClient};
pub use error::Error;
