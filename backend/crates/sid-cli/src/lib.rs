//! sid-cli library
//!
//! Command parsing and execution for the `senegalid` binary, exported for tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
