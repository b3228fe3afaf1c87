mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration; --debug overrides the file and environment
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.debug {
        config.client.debug = true;
        config.logging.level = "debug".to_string();
    }

    // 2. Logs go to stderr so command output stays pipeable
    logging::init_logging(&config.logging)?;
    debug!(command = ?cli.command, "bilikit starting");

    commands::run(cli.command, &config).await
}
