//! Show pet command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Platform API base URL (for anonymous use)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let session = storage::load_or_anonymous(args.api.as_deref())?;
    let id = ResourceId::new(&args.id).context("Invalid listing id")?;

    let pet = session.get_pet(&id).await.context("Failed to fetch pet")?;

    if args.pretty {
        return output::json_pretty(&pet);
    }

    output::field("Name", &pet.name);
    output::field("Category", pet.category.as_str());
    if let Some(age) = &pet.age {
        output::field("Age", age);
    }
    if let Some(location) = &pet.location {
        output::field("Location", location);
    }
    output::field("Adopted", if pet.adopted { "yes" } else { "no" });
    if !pet.short_description.is_empty() {
        output::field("About", &pet.short_description);
    }

    Ok(())
}
