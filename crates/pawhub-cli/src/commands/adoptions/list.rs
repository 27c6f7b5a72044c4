//! List adoption requests command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show requests received for your pets instead of your own
    #[arg(long)]
    pub incoming: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = storage::load_required()?;

    let requests = if args.incoming {
        session
            .requests_for_my_pets()
            .await
            .context("Failed to list incoming requests")?
    } else {
        session
            .my_adoption_requests()
            .await
            .context("Failed to list your requests")?
    };

    if requests.is_empty() {
        eprintln!("{}", "No requests found.".dimmed());
        return Ok(());
    }

    for request in &requests {
        if args.pretty {
            output::json_pretty(request)?;
        } else {
            output::json(request)?;
        }
    }

    Ok(())
}
