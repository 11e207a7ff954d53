//! `nodereg` command-line tool

use anyhow::Context;
use clap::Parser;
use nodereg::observability::tracing_setup;
use nodereg_cli::{execute, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_setup::init_tracing()?;

    let config = Cli::parse().into_config().context("Failed to parse arguments")?;
    match execute(config).await {
        Ok(output) => {
            println!("{}", output.text);
            if !output.success {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}
