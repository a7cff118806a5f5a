//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::categories::CategoryArgs;
use super::commands::money::MoneyArgs;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "cashtrack")]
#[command(about = "Cashtrack - personal finance API client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .cashtrack/
    #[arg(short, long, global = true, env = "CASHTRACK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the signed-in user
    Me,

    /// End the current session
    Logout,

    /// Category management commands
    Categories(CategoryArgs),

    /// Format amounts the way the web client does
    Money(MoneyArgs),
}
