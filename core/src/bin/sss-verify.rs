use std::io;
use std::process::ExitCode;

use clap::Parser;
use shamir_core::config::SssVerifyConfig;
use shamir_core::driver;

fn install_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn main() -> eyre::Result<ExitCode> {
    install_tracing();
    let config = SssVerifyConfig::parse();
    tracing::info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let report = driver::run(&config)?;

    println!("Recovered Secret: {}", report.recovered);
    println!("Status: {}", report.verification);

    Ok(report.verification.into())
}
