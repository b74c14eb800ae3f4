//! Body of the `sss-verify` binary: pick a record, reconstruct, verify.

use std::io::{self, Read};
use std::path::Path;

use crate::config::SssVerifyConfig;
use crate::reconstruct::SecretReconstructor;
use crate::record::{Report, ShareRecord};

/// Resolve the record named by `input`.
///
/// `None` selects the built-in self check, `-` reads JSON from `stdin`, any
/// other value is a path.
pub fn load_record(input: Option<&Path>, stdin: impl Read) -> eyre::Result<ShareRecord> {
    let record = match input {
        None => {
            tracing::info!("no input given, running the built-in self check");
            ShareRecord::reference()
        }
        Some(path) if path == Path::new("-") => ShareRecord::from_reader(stdin)?,
        Some(path) => {
            tracing::info!("loading share record from {}", path.display());
            ShareRecord::from_path(path)?
        }
    };
    Ok(record)
}

/// Run the driver with `-` bound to the process's standard input.
pub fn run(config: &SssVerifyConfig) -> eyre::Result<Report> {
    run_with_stdin(config, io::stdin().lock())
}

pub fn run_with_stdin(config: &SssVerifyConfig, stdin: impl Read) -> eyre::Result<Report> {
    let record = load_record(config.input.as_deref(), stdin)?;
    let reconstructor = SecretReconstructor::new(config.policy());
    Ok(record.evaluate(&reconstructor)?)
}
