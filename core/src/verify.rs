use std::fmt;
use std::process::ExitCode;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a recovered secret to the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verification {
    Valid,
    Invalid,
}

impl Verification {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// `Invalid` maps to a failing process exit status.
impl From<Verification> for ExitCode {
    fn from(verification: Verification) -> Self {
        match verification {
            Verification::Valid => ExitCode::SUCCESS,
            Verification::Invalid => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid Shares"),
            Self::Invalid => write!(f, "Invalid Shares"),
        }
    }
}

/// Plain equality check, kept apart from interpolation.
pub fn verify(recovered: u64, expected: u64) -> Verification {
    (recovered == expected).into()
}
