//! List pets command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pawhub_core::domain::PetQuery;
use pawhub_core::{FeedLoader, Sentinel};
use pawhub_http::PetPages;

use crate::output;
use crate::sentinel::{PageBudget, Prompt};
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict to one category (cat, dog, rabbit, fish, bird, other)
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text search over name and description
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

    let mut query = PetQuery::all();
    if let Some(category) = &args.category {
        query.category = Some(category.parse().context("Invalid category")?);
    }
    if let Some(search) = &args.search {
        query = query.with_search(search.clone());
    }

    let mut loader = FeedLoader::new(PetPages::new(session), query);
    let mut sentinel: Box<dyn Sentinel> = if args.interactive {
        Box::new(Prompt)
    } else {
        Box::new(PageBudget(args.pages.saturating_sub(1)))
    };

    loader.load_first().await.context("Failed to list pets")?;
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
        eprintln!("{}", "No pets found.".dimmed());
    } else if loader.feed().has_more() {
        eprintln!();
        eprintln!(
            "{}",
            format!(
                "More available ({} of {} shown).",
                loader.items().len(),
                loader
                    .feed()
                    .total()
                    .map_or("?".to_string(), |t| t.to_string())
            )
            .dimmed()
        );
    }

    Ok(())
}

fn print_from(
    loader: &FeedLoader<PetPages>,
    shown: usize,
    pretty: bool,
) -> Result<usize> {
    for pet in &loader.items()[shown..] {
        if pretty {
            output::json_pretty(pet)?;
        } else {
            output::json(pet)?;
        }
    }
    Ok(loader.items().len())
}
