//! Binary crate for the `predictor` tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Terminal and web rendering of lookup results

use clap::Parser;

mod cli;
mod logging;
mod routes;
mod templates;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cmd = cli::Cli::parse();
    logging::init_tracing(cmd.default_log_level());
    cmd.run().await
}
