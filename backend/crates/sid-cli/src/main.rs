//! senegalid - SénégalID simulated session CLI
//!
//! Every invocation restores the persisted session, runs one command and
//! prints a JSON report on stdout. Logs go to stderr or the configured file.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo administrator
//! senegalid sign-in --email test.admin@example.com --password password
//!
//! # Check dashboard access for the current session
//! senegalid open /admin-dashboard --pretty
//! ```

use sid_cli::{App, Cli, Result as CliResult, logger};
use sid_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file_path(&config_dir),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::open(&config, &config_dir).await?;
    let report = app.execute(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
