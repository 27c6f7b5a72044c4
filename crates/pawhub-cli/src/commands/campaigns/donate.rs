//! Donate command implementation.

use anyhow::{Context, Result, ensure};
use clap::Args;

use pawhub_core::metrics::{self, Currency};
use pawhub_core::types::ResourceId;
use pawhub_http::DonateRequest;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct DonateArgs {
    /// Campaign id
    pub id: String,

    /// Amount to donate
    #[arg(long)]
    pub amount: f64,

    /// Payment method token from the payment provider
    #[arg(long)]
    pub payment_token: String,
}

pub async fn run(args: DonateArgs) -> Result<()> {
    let session = storage::load_required()?;
    let id = ResourceId::new(&args.id).context("Invalid campaign id")?;
    ensure!(
        args.amount.is_finite() && args.amount > 0.0,
        "Amount must be positive"
    );

    let request = DonateRequest {
        amount: args.amount,
        payment_method_token: args.payment_token,
    };

    let campaign = session
        .donate(&id, &request)
        .await
        .context("Failed to donate")?;

    output::success(&format!(
        "Donated {} to {}",
        metrics::format_currency(args.amount, Currency::Usd),
        campaign.pet_name
    ));
    output::field(
        "Raised",
        &format!(
            "{} of {}",
            metrics::format_currency(campaign.current_amount, Currency::Usd),
            metrics::format_currency(campaign.max_amount, Currency::Usd)
        ),
    );

    Ok(())
}
