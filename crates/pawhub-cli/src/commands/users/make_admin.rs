//! Make admin command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct MakeAdminArgs {
    /// User id
    pub id: String,
}

pub async fn run(args: MakeAdminArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid user id")?;

    let user = session
        .make_admin(&id)
        .await
        .context("Failed to grant admin role")?;

    output::success(&format!("{} is now an admin", user.email));

    Ok(())
}
