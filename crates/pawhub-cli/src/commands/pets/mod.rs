//! Pet subcommand implementations.

mod adopt;
mod list;
mod mine;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct PetsCommand {
    #[command(subcommand)]
    pub command: PetsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PetsSubcommand {
    /// List adoptable pets, feeding through pages
    List(list::ListArgs),

    /// Fetch a single listing
    Show(show::ShowArgs),

    /// Submit an adoption request for a pet
    Adopt(adopt::AdoptArgs),

    /// List your own listings
    Mine(mine::MineArgs),
}

pub async fn handle(cmd: PetsCommand) -> Result<()> {
    match cmd.command {
        PetsSubcommand::List(args) => list::run(args).await,
        PetsSubcommand::Show(args) => show::run(args).await,
        PetsSubcommand::Adopt(args) => adopt::run(args).await,
        PetsSubcommand::Mine(args) => mine::run(args).await,
    }
}
