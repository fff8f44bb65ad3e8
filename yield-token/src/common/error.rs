use continuous_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Wrong registrar presented for this token
    InvalidRegistrar = 1,

    /// Start-earning requested for an address not on the earners list
    NotApprovedEarner = 2,

    /// Third party tried to stop earning for a still-approved earner
    IsApprovedEarner = 3,

    /// Burn or transfer exceeds what the cohort can cover
    InsufficientBalance = 4,

    /// Zero amount supplied where a non-zero amount is required
    InsufficientAmount = 5,

    /// Recipient cannot hold tokens
    InvalidRecipient = 6,

    /// Mint would push a supply total past its envelope
    OverflowsPrincipalOfTotalSupply = 7,

    /// Division by zero in the math kernel
    DivisionByZero = 8,

    /// Natural log requires a positive input
    InputNotPositive = 9,

    /// Supplied timestamp precedes the last index update
    NegativeTimeElapsed = 10,

    /// Arithmetic overflow or underflow occurred
    ArithmeticError = 11,

    /// Insufficient allowance; spender must call `approve` first
    InsufficientAllowance = 12,

    /// Contract is not initialized
    NotInitialized = 13,

    /// Contract is already initialized
    AlreadyInitialized = 14,
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => Error::DivisionByZero,
            MathError::Overflow => Error::ArithmeticError,
            MathError::InputNotPositive => Error::InputNotPositive,
        }
    }
}
