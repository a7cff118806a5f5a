//! Session CLI commands.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Principal;

/// The signed-in user.
#[derive(Debug, serde::Serialize)]
pub struct UserOutput {
    /// User id
    pub id: Option<i64>,
    /// Email address
    pub email: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl From<Principal> for UserOutput {
    fn from(principal: Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email,
            name: principal.name,
        }
    }
}

impl CommandOutput for UserOutput {
    fn to_human(&self) -> String {
        let id = self.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let mut lines = vec![format!("Signed in as user {id}")];
        if let Some(name) = &self.name {
            lines.push(format!("  Name:  {name}"));
        }
        if let Some(email) = &self.email {
            lines.push(format!("  Email: {email}"));
        }
        lines.join("\n")
    }
}

/// Result of `logout`.
#[derive(Debug, serde::Serialize)]
pub struct LogoutOutput {
    /// Whether the session ended
    pub signed_out: bool,
}

impl CommandOutput for LogoutOutput {
    fn to_human(&self) -> String {
        "Signed out.".to_string()
    }
}

/// Print the signed-in user.
pub async fn me(ctx: &AppContext, json_mode: bool) -> Result<()> {
    let user = ctx.require_user().await?;
    output(&UserOutput::from(user), json_mode);
    Ok(())
}

/// End the session on the server and locally.
pub async fn logout(ctx: &AppContext, json_mode: bool) -> Result<()> {
    ctx.session
        .logout()
        .await
        .context("Logout request failed")?;
    output(&LogoutOutput { signed_out: true }, json_mode);
    Ok(())
}
