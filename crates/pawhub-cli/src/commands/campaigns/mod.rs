//! Campaign subcommand implementations.

mod donate;
mod list;
mod mine;
mod pause;
mod refund;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CampaignsCommand {
    #[command(subcommand)]
    pub command: CampaignsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CampaignsSubcommand {
    /// List active campaigns, feeding through pages
    List(list::ListArgs),

    /// Fetch a single campaign with its donations
    Show(show::ShowArgs),

    /// Donate to a campaign
    Donate(donate::DonateArgs),

    /// Ask for your donation to a campaign to be refunded
    Refund(refund::RefundArgs),

    /// Toggle a campaign's paused state
    Pause(pause::PauseArgs),

    /// List campaigns you created or donated to
    Mine(mine::MineArgs),
}

pub async fn handle(cmd: CampaignsCommand) -> Result<()> {
    match cmd.command {
        CampaignsSubcommand::List(args) => list::run(args).await,
        CampaignsSubcommand::Show(args) => show::run(args).await,
        CampaignsSubcommand::Donate(args) => donate::run(args).await,
        CampaignsSubcommand::Refund(args) => refund::run(args).await,
        CampaignsSubcommand::Pause(args) => pause::run(args).await,
        CampaignsSubcommand::Mine(args) => mine::run(args).await,
    }
}
