//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pawhub_core::types::{AccessToken, ApiUrl};
use pawhub_http::Session;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Platform API base URL (or PAWHUB_API)
    #[arg(long)]
    pub api: Option<String>,

    /// Bearer token issued by the identity provider
    #[arg(long)]
    pub token: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api = storage::resolve_api(args.api.as_deref())?;
    let base = ApiUrl::new(&api).context("Invalid API URL")?;

    let session = Session::with_token(base, AccessToken::new(args.token));

    eprintln!("{}", "Signing in...".dimmed());

    // Verify the credential before persisting it
    let user = session
        .current_user()
        .await
        .context("Failed to verify credential")?;

    storage::save_session(&session).context("Failed to save session")?;

    output::success("Signed in");
    println!();
    output::field("Email", &user.email);
    if let Some(name) = &user.name {
        output::field("Name", name);
    }
    if user.is_admin() {
        output::field("Role", "admin");
    }
    output::field("API", session.base().as_str());

    Ok(())
}
