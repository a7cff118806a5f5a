//! Cashtrack CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use cashtrack_client::cli::commands::{categories, money, session};
use cashtrack_client::cli::{AppContext, Cli, Commands};
use cashtrack_client::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        cashtrack_client::cli::handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Money(args) => money::execute(args, json),
        Commands::Me => {
            let (_logger, ctx) = connect(config_path)?;
            session::me(&ctx, json).await
        }
        Commands::Logout => {
            let (_logger, ctx) = connect(config_path)?;
            session::logout(&ctx, json).await
        }
        Commands::Categories(args) => {
            let (_logger, ctx) = connect(config_path)?;
            categories::execute(args, &ctx, json).await
        }
    }
}

/// Load configuration, start logging and build the API stack.
fn connect(config_path: Option<&Path>) -> Result<(LoggerImpl, AppContext)> {
    let config = AppContext::load(config_path)?;
    let logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
    let ctx = AppContext::build(config)?;
    Ok((logger, ctx))
}
