pub mod accounting;
pub mod allowance;
