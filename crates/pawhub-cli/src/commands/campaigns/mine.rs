//! My campaigns command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct MineArgs {
    /// List campaigns you donated to instead of ones you created
    #[arg(long)]
    pub donated: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: MineArgs) -> Result<()> {
    let session = storage::load_required()?;

    let campaigns = if args.donated {
        session
            .my_donations()
            .await
            .context("Failed to list your donations")?
    } else {
        session
            .my_campaigns()
            .await
            .context("Failed to list your campaigns")?
    };

    if campaigns.is_empty() {
        eprintln!("{}", "No campaigns found.".dimmed());
        return Ok(());
    }

    for campaign in &campaigns {
        if args.pretty {
            output::json_pretty(campaign)?;
        } else {
            output::json(campaign)?;
        }
    }

    Ok(())
}
