//! Ban user command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct BanArgs {
    /// User id
    pub id: String,
}

pub async fn run(args: BanArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid user id")?;

    let user = session
        .ban_user(&id)
        .await
        .context("Failed to toggle ban")?;

    if user.banned {
        output::success(&format!("{} banned", user.email));
    } else {
        output::success(&format!("{} unbanned", user.email));
    }

    Ok(())
}
