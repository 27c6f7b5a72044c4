//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Pretty-print the full user record as JSON
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: WhoamiArgs) -> Result<()> {
    let session = storage::load_required()?;

    let user = session
        .current_user()
        .await
        .context("Failed to fetch account")?;

    if args.pretty {
        return output::json_pretty(&user);
    }

    output::field("Email", &user.email);
    if let Some(name) = &user.name {
        output::field("Name", name);
    }
    output::field("Role", if user.is_admin() { "admin" } else { "user" });
    if user.banned {
        output::field("Banned", "yes");
    }
    output::field("API", session.base().as_str());

    Ok(())
}
