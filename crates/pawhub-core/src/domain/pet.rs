//! Adoptable pet record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;
use crate::types::{ResourceId, Species};

/// A pet listed for adoption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ResourceId,

    /// Display name.
    pub name: String,

    /// Listing category.
    pub category: Species,

    /// Free-form age description ("2 years", "6 months").
    #[serde(default)]
    pub age: Option<String>,

    /// Where the pet currently is.
    #[serde(default)]
    pub location: Option<String>,

    /// One-line teaser shown on cards.
    #[serde(default)]
    pub short_description: String,

    /// Full description shown on the detail page.
    #[serde(default)]
    pub long_description: String,

    /// URL of the hosted image, set after upload.
    #[serde(default)]
    pub image: Option<String>,

    /// True once an adoption request was accepted.
    #[serde(default)]
    pub adopted: bool,

    /// Identifier of the listing owner.
    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Pet {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let pet: Pet = serde_json::from_value(serde_json::json!({
            "_id": "pet1",
            "name": "Biscuit",
            "category": "dog",
            "age": "2 years",
            "shortDescription": "Good boy",
            "adopted": false
        }))
        .unwrap();
        assert_eq!(pet.id.as_str(), "pet1");
        assert_eq!(pet.category, Species::Dog);
        assert!(!pet.adopted);
        assert!(pet.image.is_none());
    }
}
