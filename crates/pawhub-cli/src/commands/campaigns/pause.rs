//! Pause campaign command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct PauseArgs {
    /// Campaign id
    pub id: String,
}

pub async fn run(args: PauseArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid campaign id")?;

    let campaign = session
        .pause_campaign(&id)
        .await
        .context("Failed to toggle pause")?;

    if campaign.paused {
        output::success(&format!("Campaign for {} paused", campaign.pet_name));
    } else {
        output::success(&format!("Campaign for {} resumed", campaign.pet_name));
    }

    Ok(())
}
