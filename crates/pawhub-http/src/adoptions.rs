//! Adoption request operations.

use tracing::instrument;

use pawhub_core::domain::AdoptionRequest;
use pawhub_core::types::ResourceId;
use pawhub_core::Result;

use crate::endpoints::{self, AdoptionForm, NO_QUERY};
use crate::session::Session;

impl Session {
    /// Submit an adoption request directly (not via a pet's adopt
    /// action).
    #[instrument(skip(self, form))]
    pub async fn create_adoption_request(&self, form: &AdoptionForm) -> Result<AdoptionRequest> {
        let token = self.require_bearer()?;
        self.client()
            .post(endpoints::ADOPTIONS, form, Some(&token))
            .await
    }

    /// Adoption requests the caller submitted.
    #[instrument(skip(self))]
    pub async fn my_adoption_requests(&self) -> Result<Vec<AdoptionRequest>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::MY_REQUESTS, &NO_QUERY, Some(&token))
            .await
    }

    /// Adoption requests other users filed against the caller's pets.
    #[instrument(skip(self))]
    pub async fn requests_for_my_pets(&self) -> Result<Vec<AdoptionRequest>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::REQUESTS_FOR_MY_PETS, &NO_QUERY, Some(&token))
            .await
    }

    /// Accept an adoption request. Returns the updated request.
    #[instrument(skip(self), fields(%id))]
    pub async fn accept_request(&self, id: &ResourceId) -> Result<AdoptionRequest> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::adoption_accept(id), Some(&token))
            .await
    }

    /// Reject an adoption request. Returns the updated request.
    #[instrument(skip(self), fields(%id))]
    pub async fn reject_request(&self, id: &ResourceId) -> Result<AdoptionRequest> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::adoption_reject(id), Some(&token))
            .await
    }
}
