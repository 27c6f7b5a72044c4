//! User administration subcommand implementations.

mod ban;
mod list;
mod make_admin;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List every registered user
    List(list::ListArgs),

    /// Toggle a user's banned state
    Ban(ban::BanArgs),

    /// Grant a user the admin role
    MakeAdmin(make_admin::MakeAdminArgs),
}

pub async fn handle(cmd: UsersCommand) -> Result<()> {
    match cmd.command {
        UsersSubcommand::List(args) => list::run(args).await,
        UsersSubcommand::Ban(args) => ban::run(args).await,
        UsersSubcommand::MakeAdmin(args) => make_admin::run(args).await,
    }
}
