//! Money formatting CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::output::{output, CommandOutput};
use crate::domain::money::{
    cents_to_number, format_chf_amount, format_signed_cents, EntryType,
};

/// Arguments of `money`.
#[derive(Args, Debug)]
pub struct MoneyArgs {
    /// Money subcommand
    #[command(subcommand)]
    pub command: MoneyCommands,
}

/// Money subcommands.
#[derive(Subcommand, Debug)]
pub enum MoneyCommands {
    /// Format an amount given in cents
    Cents {
        /// Amount in cents (may be negative)
        #[arg(allow_hyphen_values = true)]
        value: i64,
        /// Entry type (credit, debit)
        #[arg(short, long)]
        entry_type: Option<EntryType>,
    },
    /// Format an amount in Swiss francs
    Chf {
        /// Amount in francs
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

/// A formatted amount.
#[derive(Debug, serde::Serialize)]
pub struct MoneyOutput {
    /// Display string
    pub formatted: String,
    /// Numeric amount in francs
    pub value: f64,
}

impl CommandOutput for MoneyOutput {
    fn to_human(&self) -> String {
        self.formatted.clone()
    }
}

/// Run a money subcommand.
pub fn execute(args: MoneyArgs, json_mode: bool) -> Result<()> {
    let result = match args.command {
        MoneyCommands::Cents { value, entry_type } => MoneyOutput {
            formatted: format_signed_cents(value, entry_type),
            value: cents_to_number(value),
        },
        MoneyCommands::Chf { value } => MoneyOutput {
            formatted: format_chf_amount(value),
            value,
        },
    };
    output(&result, json_mode);
    Ok(())
}
