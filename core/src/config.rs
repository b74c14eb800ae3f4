use std::path::PathBuf;

use clap::Parser;

use crate::params::ReconstructionPolicy;

/// The configuration for the `sss-verify` binary.
///
/// It can be configured via environment variables or command line arguments using `clap`.
#[derive(Parser, Debug, Clone)]
#[clap(version, about = "Reconstruct a Shamir secret from a share record and check it")]
pub struct SssVerifyConfig {
    /// JSON share record to load, `-` for stdin. Runs the built-in self check when omitted.
    #[clap(long, short, env = "SSS_INPUT")]
    pub input: Option<PathBuf>,

    /// Skip the primality, zero-x and range checks.
    #[clap(long, env = "SSS_PERMISSIVE")]
    pub permissive: bool,

    /// Minimum number of shares required for reconstruction.
    #[clap(long, env = "SSS_THRESHOLD")]
    pub threshold: Option<usize>,
}

impl SssVerifyConfig {
    pub fn policy(&self) -> ReconstructionPolicy {
        let policy = if self.permissive {
            ReconstructionPolicy::permissive()
        } else {
            ReconstructionPolicy::strict()
        };
        match self.threshold {
            Some(threshold) => policy.with_threshold(threshold),
            None => policy,
        }
    }
}
