#![no_std]

pub mod admin;
pub mod common;
pub mod indexing;
pub mod token;

pub use common::error::Error;

pub mod contract;

pub use contract::{YieldTokenContract, YieldTokenContractClient};

#[cfg(test)]
mod test;
