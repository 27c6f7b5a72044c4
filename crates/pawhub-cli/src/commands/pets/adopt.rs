//! Adopt pet command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;
use pawhub_http::AdoptionForm;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct AdoptArgs {
    /// Listing id
    pub id: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,

    /// Contact address
    #[arg(long)]
    pub address: String,
}

pub async fn run(args: AdoptArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid listing id")?;

    let form = AdoptionForm {
        pet_id: None,
        phone: args.phone,
        address: args.address,
    };

    let request = session
        .adopt_pet(&id, &form)
        .await
        .context("Failed to submit adoption request")?;

    output::success("Adoption request submitted");
    println!();
    output::field("Request", request.id.as_str());
    output::field("Status", request.status.as_str());

    Ok(())
}
