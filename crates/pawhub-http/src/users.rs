//! Profile and user-moderation operations.

use tracing::instrument;

use pawhub_core::domain::User;
use pawhub_core::types::ResourceId;
use pawhub_core::Result;

use crate::endpoints::{self, ProfileUpdate, NO_QUERY};
use crate::session::Session;

impl Session {
    /// The caller's profile.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::PROFILE, &NO_QUERY, Some(&token))
            .await
    }

    /// Update the caller's profile.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .put(endpoints::PROFILE, update, Some(&token))
            .await
    }

    /// Every registered user (admin moderation view).
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::USERS, &NO_QUERY, Some(&token))
            .await
    }

    /// Grant a user the admin role. Returns the updated user.
    #[instrument(skip(self), fields(%id))]
    pub async fn make_admin(&self, id: &ResourceId) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::user_make_admin(id), Some(&token))
            .await
    }

    /// Ban a user. Returns the updated user.
    #[instrument(skip(self), fields(%id))]
    pub async fn ban_user(&self, id: &ResourceId) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::user_ban(id), Some(&token))
            .await
    }
}
