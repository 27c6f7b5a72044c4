//! Adoption request record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;
use crate::types::ResourceId;

/// Lifecycle state of an adoption request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// A user's request to adopt a listed pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ResourceId,

    /// The pet this request is for.
    pub pet_id: ResourceId,

    #[serde(default)]
    pub pet_name: Option<String>,

    #[serde(default)]
    pub pet_image: Option<String>,

    #[serde(default)]
    pub requester_name: Option<String>,

    #[serde(default)]
    pub requester_email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Moderation state, flipped by the pet owner.
    #[serde(default)]
    pub status: RequestStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for AdoptionRequest {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let req: AdoptionRequest = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "petId": "pet1"
        }))
        .unwrap();
        assert_eq!(req.status, RequestStatus::Pending);
    }

    #[test]
    fn status_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
