//! Category CLI commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Category;

/// Arguments of `categories`.
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommands,
}

/// Category subcommands.
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories, sorted by name
    List,
    /// Create a category
    Add {
        /// Category name
        name: String,
    },
    /// Rename a category
    Rename {
        /// Category id
        id: i64,
        /// New name
        name: String,
    },
    /// Delete a category
    Delete {
        /// Category id
        id: i64,
    },
}

/// Result of `categories list`.
#[derive(Debug, serde::Serialize)]
pub struct CategoryListOutput {
    /// Categories in name order
    pub categories: Vec<Category>,
    /// Number of categories
    pub total: usize,
}

impl CommandOutput for CategoryListOutput {
    fn to_human(&self) -> String {
        if self.categories.is_empty() {
            return "No categories found.".to_string();
        }
        format!(
            "Found {} categor{}:\n{}",
            self.total,
            if self.total == 1 { "y" } else { "ies" },
            TableFormatter::new().format_categories(&self.categories)
        )
    }
}

/// Result of a category mutation.
#[derive(Debug, serde::Serialize)]
pub struct CategoryChangeOutput {
    /// What happened (created, renamed, deleted)
    pub action: &'static str,
    /// Category id
    pub id: i64,
    /// Name after the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CommandOutput for CategoryChangeOutput {
    fn to_human(&self) -> String {
        match &self.name {
            Some(name) => format!("Category {} {}: {name}", self.id, self.action),
            None => format!("Category {} {}", self.id, self.action),
        }
    }
}

/// Run a category subcommand.
pub async fn execute(args: CategoryArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    ctx.require_user().await?;

    match args.command {
        CategoryCommands::List => {
            let store = ctx.categories.store();
            if !store.load(false).await {
                bail!(store.error());
            }
            let categories = store.items();
            let result = CategoryListOutput {
                total: categories.len(),
                categories,
            };
            output(&result, json_mode);
        }
        CategoryCommands::Add { name } => {
            let category = ctx.categories.create(&name).await?;
            output(
                &CategoryChangeOutput {
                    action: "created",
                    id: category.id,
                    name: Some(category.name),
                },
                json_mode,
            );
        }
        CategoryCommands::Rename { id, name } => {
            ctx.categories.rename(id, &name).await?;
            output(
                &CategoryChangeOutput {
                    action: "renamed",
                    id,
                    name: Some(name.trim().to_string()),
                },
                json_mode,
            );
        }
        CategoryCommands::Delete { id } => {
            ctx.categories.delete(id).await?;
            output(
                &CategoryChangeOutput {
                    action: "deleted",
                    id,
                    name: None,
                },
                json_mode,
            );
        }
    }

    Ok(())
}
