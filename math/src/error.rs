use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type for prime field arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("modulus must be greater than 1, got {0}")]
    InvalidModulus(u64),
    /// `value` is the operand as the caller passed it, before reduction.
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: i128, modulus: u64 },
}
