//! Reject adoption request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// Request id
    pub id: String,
}

pub async fn run(args: RejectArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid request id")?;

    let request = session
        .reject_request(&id)
        .await
        .context("Failed to reject request")?;

    output::success("Request rejected");
    output::field("Status", request.status.as_str());

    Ok(())
}
