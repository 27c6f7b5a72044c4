//! Refund request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct RefundArgs {
    /// Campaign id your donation went to
    pub id: String,
}

pub async fn run(args: RefundArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid campaign id")?;

    session
        .request_refund(&id)
        .await
        .context("Failed to request refund")?;

    output::success("Refund requested; the campaign creator will process it");
    Ok(())
}
