//! Typed share record handed over by file or stream loaders.
//!
//! ```json
//! { "expectedSecret": 1234, "prime": 2087,
//!   "shares": [ { "x": 1, "y": 1494 }, { "x": 2, "y": 1942 }, { "x": 3, "y": 491 } ] }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ShamirResult;
use crate::reconstruct::SecretReconstructor;
use crate::share::Share;
use crate::verify::{verify, Verification};

/// Errors raised while loading a [`ShareRecord`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read share record: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed share record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Expected secret, prime and shares, as decoded from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    pub expected_secret: u64,
    pub prime: u64,
    pub shares: Vec<Share>,
}

/// Recovered secret together with its verification status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub recovered: u64,
    pub verification: Verification,
}

impl ShareRecord {
    /// The three-share example over p = 2087 hiding 1234.
    pub fn reference() -> Self {
        Self {
            expected_secret: 1234,
            prime: 2087,
            shares: vec![Share::new(1, 1494), Share::new(2, 1942), Share::new(3, 491)],
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reconstruct the secret and compare it with `expected_secret`.
    pub fn evaluate(&self, reconstructor: &SecretReconstructor) -> ShamirResult<Report> {
        let recovered = reconstructor.reconstruct(&self.shares, self.prime)?;
        Ok(Report {
            recovered,
            verification: verify(recovered, self.expected_secret),
        })
    }
}
