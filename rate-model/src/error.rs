use continuous_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Token is wired to a different registrar
    InvalidRegistrar = 1,

    /// Arithmetic overflow or underflow occurred
    ArithmeticError = 2,

    /// Division by zero in the math kernel
    DivisionByZero = 3,

    /// Natural log requires a positive input
    InputNotPositive = 4,
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
