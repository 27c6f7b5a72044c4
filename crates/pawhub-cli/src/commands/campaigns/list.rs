//! List campaigns command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pawhub_core::domain::CampaignQuery;
use pawhub_core::{FeedLoader, Sentinel};
use pawhub_http::CampaignPages;

use crate::output;
use crate::sentinel::{PageBudget, Prompt};
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over pet name and description
    #[arg(long)]
    pub search: Option<String>,

    /// Number of pages to load
    #[arg(long, default_value = "1")]
    pub pages: usize,

    /// Ask before loading each further page
    #[arg(long)]
    pub interactive: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Platform API base URL (for anonymous use)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = storage::load_or_anonymous(args.api.as_deref())?;

    let mut query = CampaignQuery::all();
    if let Some(search) = &args.search {
        query = query.with_search(search.clone());
    }

    let mut loader = FeedLoader::new(CampaignPages::new(session), query);
    let mut sentinel: Box<dyn Sentinel> = if args.interactive {
        Box::new(Prompt)
    } else {
        Box::new(PageBudget(args.pages.saturating_sub(1)))
    };

    loader
        .load_first()
        .await
        .context("Failed to list campaigns")?;
    let mut shown = print_from(&loader, 0, args.pretty)?;

    while loader.feed().has_more() {
        if !sentinel.became_visible().await {
            break;
        }
        loader
            .notify_visible()
            .await
            .context("Failed to load next page")?;
        shown = print_from(&loader, shown, args.pretty)?;
    }

    if loader.items().is_empty() {
        eprintln!("{}", "No campaigns found.".dimmed());
    }

    Ok(())
}

fn print_from(
    loader: &FeedLoader<CampaignPages>,
    shown: usize,
    pretty: bool,
) -> Result<usize> {
    for campaign in &loader.items()[shown..] {
        if pretty {
            output::json_pretty(campaign)?;
        } else {
            output::json(campaign)?;
        }
    }
    Ok(loader.items().len())
}
