//! Show campaign command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use pawhub_core::metrics::{self, Currency};
use pawhub_core::types::ResourceId;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Campaign id
    pub id: String,

    /// Currency for amount display (USD, EUR, GBP, JPY)
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Platform API base URL (for anonymous use)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let session = storage::load_or_anonymous(args.api.as_deref())?;
    let id = ResourceId::new(&args.id).context("Invalid campaign id")?;
    let currency = Currency::from_code(&args.currency).context("Invalid currency")?;

    let campaign = session
        .get_campaign(&id)
        .await
        .context("Failed to fetch campaign")?;

    if args.pretty {
        return output::json_pretty(&campaign);
    }

    output::field("Pet", &campaign.pet_name);
    output::field(
        "Raised",
        &format!(
            "{} of {} ({:.0}%)",
            metrics::format_currency(campaign.current_amount, currency),
            metrics::format_currency(campaign.max_amount, currency),
            campaign.progress() * 100.0
        ),
    );
    output::field(
        "Days left",
        &campaign.days_remaining(Utc::now()).to_string(),
    );
    if campaign.paused {
        output::field("Status", "paused");
    }
    if !campaign.short_description.is_empty() {
        output::field("About", &campaign.short_description);
    }

    if !campaign.donations.is_empty() {
        println!();
        for donation in &campaign.donations {
            let name = donation.donor_name.as_deref().unwrap_or("anonymous");
            let refund = if donation.refund_requested {
                " (refund requested)".dimmed().to_string()
            } else {
                String::new()
            };
            println!(
                "  {} {}{}",
                metrics::format_currency(donation.amount, currency),
                name,
                refund
            );
        }
    }

    Ok(())
}
