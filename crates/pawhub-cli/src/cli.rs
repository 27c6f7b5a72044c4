//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::account;
use crate::commands::adoptions::AdoptionsCommand;
use crate::commands::campaigns::CampaignsCommand;
use crate::commands::pets::PetsCommand;
use crate::commands::users::UsersCommand;

/// PawHub platform client.
#[derive(Parser, Debug)]
#[command(name = "pawhub")]
#[command(author, version = env!("PAWHUB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with a provider-issued token and persist the session
    Login(account::login::LoginArgs),

    /// Drop the persisted session
    Logout(account::logout::LogoutArgs),

    /// Display the signed-in account
    Whoami(account::whoami::WhoamiArgs),

    /// Browse and manage adoption listings
    Pets(PetsCommand),

    /// Browse and manage donation campaigns
    Campaigns(CampaignsCommand),

    /// Review adoption requests
    Adoptions(AdoptionsCommand),

    /// User administration (admin only)
    Users(UsersCommand),
}
