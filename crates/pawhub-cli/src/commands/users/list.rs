//! List users command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = storage::load_required()?;

    let users = session.list_users().await.context("Failed to list users")?;

    if users.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    for user in &users {
        if args.pretty {
            output::json_pretty(user)?;
        } else {
            output::json(user)?;
        }
    }

    Ok(())
}
