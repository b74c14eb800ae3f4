use math::error::MathError;
use thiserror::Error;

/// Result type specialized for reconstruction.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while validating shares or interpolating them.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("No shares supplied")]
    NoShares,
    #[error("Duplicate x value: {0}")]
    DuplicateX(u64),
    #[error("Insufficient shares: need {required}, got {provided}")]
    BelowThreshold { required: usize, provided: usize },
    #[error("Share at x = 0 (mod p) exposes the secret directly")]
    ZeroX,
    #[error("Modulus {0} is not prime")]
    NonPrimeModulus(u64),
    #[error("Value {value} is not below the modulus {modulus}")]
    OutOfRange { value: u64, modulus: u64 },
    #[error(transparent)]
    Math(#[from] MathError),
}
