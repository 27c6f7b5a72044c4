//! Adoption request subcommand implementations.

mod accept;
mod list;
mod reject;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AdoptionsCommand {
    #[command(subcommand)]
    pub command: AdoptionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdoptionsSubcommand {
    /// List your requests, or requests for your pets
    List(list::ListArgs),

    /// Accept a request for one of your pets
    Accept(accept::AcceptArgs),

    /// Reject a request for one of your pets
    Reject(reject::RejectArgs),
}

pub async fn handle(cmd: AdoptionsCommand) -> Result<()> {
    match cmd.command {
        AdoptionsSubcommand::List(args) => list::run(args).await,
        AdoptionsSubcommand::Accept(args) => accept::run(args).await,
        AdoptionsSubcommand::Reject(args) => reject::run(args).await,
    }
}
