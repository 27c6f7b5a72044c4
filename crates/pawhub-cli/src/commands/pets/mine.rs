//! My listings command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pawhub_core::PageToken;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct MineArgs {
    /// Page to fetch
    #[arg(long)]
    pub page: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: MineArgs) -> Result<()> {
    let session = storage::load_required()?;
    let page = args.page.as_deref().map(PageToken::new);

    let result = session
        .my_pets(page.as_ref())
        .await
        .context("Failed to list your pets")?;

    if result.items.is_empty() {
        eprintln!("{}", "No listings found.".dimmed());
        return Ok(());
    }

    for pet in &result.items {
        if args.pretty {
            output::json_pretty(pet)?;
        } else {
            output::json(pet)?;
        }
    }

    if let Some(next) = &result.next {
        eprintln!();
        eprintln!("{}: {}", "Next page".dimmed(), next);
    }

    Ok(())
}
