//! pawhub - command line client for the PawHub adoption and donation
//! platform.
//!
//! This is a thin wrapper over the `pawhub-http` library, intended for
//! browsing listings, managing campaigns, and moderating the platform
//! from a terminal.

mod cli;
mod commands;
mod output;
mod sentinel;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{account, adoptions, campaigns, pets, users};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Login(args) => account::login::run(args).await,
        Commands::Logout(args) => account::logout::run(args).await,
        Commands::Whoami(args) => account::whoami::run(args).await,
        Commands::Pets(cmd) => pets::handle(cmd).await,
        Commands::Campaigns(cmd) => campaigns::handle(cmd).await,
        Commands::Adoptions(cmd) => adoptions::handle(cmd).await,
        Commands::Users(cmd) => users::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
