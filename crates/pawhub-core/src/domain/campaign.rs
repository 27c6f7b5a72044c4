//! Fundraising campaign and donation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;
use crate::types::ResourceId;

/// A fundraising campaign for a pet needing care.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ResourceId,

    /// Name of the pet the campaign is for.
    pub pet_name: String,

    /// URL of the hosted pet image.
    #[serde(default)]
    pub pet_image: Option<String>,

    /// Funding goal.
    pub max_amount: f64,

    /// Amount raised so far, maintained by the server.
    #[serde(default)]
    pub current_amount: f64,

    /// Last day the campaign accepts donations.
    pub last_date: DateTime<Utc>,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub long_description: String,

    /// Paused campaigns stay visible but accept no donations.
    #[serde(rename = "isPaused", default)]
    pub paused: bool,

    /// Identifier of the campaign creator.
    #[serde(default)]
    pub creator: Option<String>,

    /// Donations made to this campaign, newest last.
    #[serde(default)]
    pub donations: Vec<Donation>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Look up a donation on this campaign by id.
    pub fn donation_mut(&mut self, id: &ResourceId) -> Option<&mut Donation> {
        self.donations.iter_mut().find(|d| &d.id == id)
    }

    /// Funding progress in `[0, 1]`, clamped.
    pub fn progress(&self) -> f64 {
        crate::metrics::progress_ratio(self.current_amount, self.max_amount)
    }

    /// Whole days until the campaign ends, floored at zero.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> u32 {
        crate::metrics::days_remaining(self.last_date, now)
    }
}

impl Keyed for Campaign {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

/// A single donation to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ResourceId,

    /// Identifier of the donating user.
    #[serde(default)]
    pub donor: Option<String>,

    /// Display name of the donating user.
    #[serde(default)]
    pub donor_name: Option<String>,

    /// Donated amount.
    pub amount: f64,

    #[serde(default)]
    pub donated_at: Option<DateTime<Utc>>,

    /// The donor asked for this donation to be refunded.
    #[serde(default)]
    pub refund_requested: bool,
}

impl Keyed for Donation {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn campaign() -> Campaign {
        serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "petName": "Mochi",
            "maxAmount": 500.0,
            "currentAmount": 125.0,
            "lastDate": "2026-12-31T00:00:00Z",
            "isPaused": false,
            "donations": [
                {"_id": "d1", "amount": 25.0, "refundRequested": false},
                {"_id": "d2", "amount": 100.0, "refundRequested": true}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_nested_donations() {
        let c = campaign();
        assert_eq!(c.donations.len(), 2);
        assert!(c.donations[1].refund_requested);
    }

    #[test]
    fn donation_lookup_by_id() {
        let mut c = campaign();
        let id = ResourceId::new("d2").unwrap();
        assert_eq!(c.donation_mut(&id).unwrap().amount, 100.0);
        let missing = ResourceId::new("nope").unwrap();
        assert!(c.donation_mut(&missing).is_none());
    }

    #[test]
    fn derived_metrics() {
        let c = campaign();
        assert_eq!(c.progress(), 0.25);
        let now = Utc.with_ymd_and_hms(2026, 12, 30, 12, 0, 0).unwrap();
        assert_eq!(c.days_remaining(now), 1);
    }
}
