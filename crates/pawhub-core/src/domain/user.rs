//! Platform user record.

use serde::{Deserialize, Serialize};

use super::Keyed;
use crate::types::ResourceId;

/// Access role of a platform user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A registered platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ResourceId,

    #[serde(default)]
    pub name: Option<String>,

    pub email: String,

    #[serde(default)]
    pub role: Role,

    /// Banned users keep their records but cannot act.
    #[serde(default)]
    pub banned: bool,

    #[serde(default)]
    pub photo_url: Option<String>,
}

impl User {
    /// True if this user may moderate users, pets, and campaigns.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Keyed for User {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "email": "sam@example.com"
        }))
        .unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
    }
}
