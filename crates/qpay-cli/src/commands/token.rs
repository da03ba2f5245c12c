//! Token commands.

use anyhow::{Context, Result};
use clap::Args;
use qpay::TokenResponse;

use crate::output;

use super::client_from_env;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Print the full token response as JSON, including the tokens
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: TokenArgs) -> Result<()> {
    let client = client_from_env()?;

    output::note("Authenticating...");
    let token = client.get_token().await.context("Failed to authenticate")?;

    print_token(&token, args.json)
}

pub async fn run_refresh(args: TokenArgs) -> Result<()> {
    let client = client_from_env()?;

    output::note("Authenticating...");
    client.get_token().await.context("Failed to authenticate")?;

    output::note("Refreshing token...");
    let token = client
        .refresh_token()
        .await
        .context("Failed to refresh token")?;

    print_token(&token, args.json)
}

fn print_token(token: &TokenResponse, json: bool) -> Result<()> {
    if json {
        return output::json_pretty(token);
    }

    output::success("Token obtained");
    println!();
    output::field("Type", &token.token_type);
    output::field("Access expires", &format_expiry(token.access_expires_at()));
    output::field(
        "Refresh expires",
        &format_expiry(token.refresh_expires_at()),
    );
    if !token.scope.is_empty() {
        output::field("Scope", &token.scope);
    }
    Ok(())
}

fn format_expiry(at: Option<chrono::DateTime<chrono::Utc>>) -> String {
    at.map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string())
}
