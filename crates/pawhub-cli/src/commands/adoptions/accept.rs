//! Accept adoption request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct AcceptArgs {
    /// Request id
    pub id: String,
}

pub async fn run(args: AcceptArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid request id")?;

    let request = session
        .accept_request(&id)
        .await
        .context("Failed to accept request")?;

    output::success("Request accepted");
    output::field("Status", request.status.as_str());

    Ok(())
}
