//! Endpoint paths and wire request/response types.

use serde::{Deserialize, Serialize};

use pawhub_core::page::{Page, PageToken};
use pawhub_core::types::{ResourceId, Species};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// GET (list) / POST (create) pets.
pub const PETS: &str = "/pets";

/// GET the caller's own listings.
pub const MY_PETS: &str = "/pets/user/my-pets";

/// GET every pet, unmoderated (admin).
pub const PETS_ADMIN: &str = "/pets/admin/all";

/// GET (list) / POST (create) donation campaigns.
pub const DONATIONS: &str = "/donations";

/// GET campaigns created by the caller.
pub const MY_CAMPAIGNS: &str = "/donations/user/my-campaigns";

/// GET campaigns the caller donated to.
pub const MY_DONATIONS: &str = "/donations/user/my-donations";

/// GET every campaign, unmoderated (admin).
pub const DONATIONS_ADMIN: &str = "/donations/admin/all";

/// POST (create) adoption requests.
pub const ADOPTIONS: &str = "/adoptions";

/// GET adoption requests the caller submitted.
pub const MY_REQUESTS: &str = "/adoptions/my-requests";

/// GET adoption requests against the caller's pets.
pub const REQUESTS_FOR_MY_PETS: &str = "/adoptions/for-my-pets";

/// GET (list) users (admin).
pub const USERS: &str = "/users";

/// GET / PUT the caller's profile.
pub const PROFILE: &str = "/users/profile";

/// GET the platform record of the signed-in identity.
pub const AUTH_ME: &str = "/auth/me";

/// POST a newly signed-up identity's platform record.
pub const AUTH_REGISTER: &str = "/auth/register";

pub fn pet(id: &ResourceId) -> String {
    format!("/pets/{id}")
}

pub fn pet_adopt(id: &ResourceId) -> String {
    format!("/pets/{id}/adopt")
}

pub fn pet_adopted(id: &ResourceId) -> String {
    format!("/pets/{id}/adopted")
}

pub fn campaign(id: &ResourceId) -> String {
    format!("/donations/{id}")
}

pub fn campaign_pause(id: &ResourceId) -> String {
    format!("/donations/{id}/pause")
}

pub fn campaign_donate(id: &ResourceId) -> String {
    format!("/donations/{id}/donate")
}

pub fn campaign_refund(id: &ResourceId) -> String {
    format!("/donations/{id}/refund")
}

pub fn campaign_recommended(id: &ResourceId) -> String {
    format!("/donations/{id}/recommended")
}

pub fn adoption_accept(id: &ResourceId) -> String {
    format!("/adoptions/{id}/accept")
}

pub fn adoption_reject(id: &ResourceId) -> String {
    format!("/adoptions/{id}/reject")
}

pub fn user_make_admin(id: &ResourceId) -> String {
    format!("/users/{id}/make-admin")
}

pub fn user_ban(id: &ResourceId) -> String {
    format!("/users/{id}/ban")
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Empty query-parameter set for endpoints that take none.
pub const NO_QUERY: [(&str, &str); 0] = [];

/// Error envelope the platform wraps non-2xx responses in.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Serialize)]
pub struct ListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
}

impl<'a> ListParams<'a> {
    /// Parameters for a plain unfiltered page.
    pub fn page(token: Option<&'a PageToken>) -> Self {
        Self {
            page: token.map(PageToken::as_str),
            limit: None,
            search: None,
            category: None,
        }
    }
}

/// Pagination envelope of the list endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_page: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> ListEnvelope<T> {
    /// Normalize into the core page shape. The server's numeric next
    /// page becomes the opaque token it will receive back.
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.data,
            next: self.next_page.map(PageToken::from),
            total: self.total,
        }
    }
}

/// Request body for creating or replacing a pet listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub category: Species,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub short_description: String,
    pub long_description: String,
    /// Hosted image URL from [`ImageHost`](crate::ImageHost).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Request body for submitting an adoption request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<ResourceId>,
    pub phone: String,
    pub address: String,
}

/// Request body for creating or replacing a campaign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub pet_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_image: Option<String>,
    pub max_amount: f64,
    /// ISO 8601 date the campaign stops accepting donations.
    pub last_date: String,
    pub short_description: String,
    pub long_description: String,
}

/// Request body for donating to a campaign.
///
/// Carries the payment provider's method token, never raw card data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateRequest {
    pub amount: f64,
    pub payment_method_token: String,
}

/// Request body for registering a signed-up identity with the platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Request body for updating the caller's profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_skip_absent_fields() {
        let params = ListParams::page(None);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn envelope_normalizes_to_page() {
        let envelope: ListEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "data": [1, 2, 3],
            "nextPage": 2,
            "total": 9
        }))
        .unwrap();
        let page = envelope.into_page();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.next.unwrap().as_str(), "2");
        assert_eq!(page.total, Some(9));
    }

    #[test]
    fn envelope_without_next_page_is_last() {
        let envelope: ListEnvelope<u32> =
            serde_json::from_value(serde_json::json!({ "data": [] })).unwrap();
        assert!(envelope.into_page().is_last());
    }
}
