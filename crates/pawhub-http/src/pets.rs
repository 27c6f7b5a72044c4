//! Pet operations.

use tracing::{debug, instrument};

use pawhub_core::domain::{AdoptionRequest, Pet, PetQuery};
use pawhub_core::page::{Page, PageToken};
use pawhub_core::types::ResourceId;
use pawhub_core::Result;

use crate::endpoints::{self, AdoptionForm, ListParams, NewPet, NO_QUERY};
use crate::session::Session;

impl Session {
    /// List one page of adoptable pets matching the query.
    ///
    /// Public: works anonymously, but the credential is attached when
    /// present so the server can personalize.
    #[instrument(skip(self))]
    pub async fn list_pets(
        &self,
        query: &PetQuery,
        page: Option<&PageToken>,
    ) -> Result<Page<Pet>> {
        debug!("listing pets");
        let category = query.category.map(|c| c.as_str());
        let params = ListParams {
            page: page.map(PageToken::as_str),
            limit: None,
            search: query.search.as_deref(),
            category,
        };

        let envelope: endpoints::ListEnvelope<Pet> = self
            .client()
            .get(endpoints::PETS, &params, self.bearer().as_deref())
            .await?;
        Ok(envelope.into_page())
    }

    /// Fetch one pet by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get_pet(&self, id: &ResourceId) -> Result<Pet> {
        self.client()
            .get(&endpoints::pet(id), &NO_QUERY, self.bearer().as_deref())
            .await
    }

    /// Create a pet listing.
    #[instrument(skip(self, pet))]
    pub async fn create_pet(&self, pet: &NewPet) -> Result<Pet> {
        let token = self.require_bearer()?;
        self.client().post(endpoints::PETS, pet, Some(&token)).await
    }

    /// Replace a pet listing.
    #[instrument(skip(self, pet), fields(%id))]
    pub async fn update_pet(&self, id: &ResourceId, pet: &NewPet) -> Result<Pet> {
        let token = self.require_bearer()?;
        self.client()
            .put(&endpoints::pet(id), pet, Some(&token))
            .await
    }

    /// Delete a pet listing.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_pet(&self, id: &ResourceId) -> Result<()> {
        let token = self.require_bearer()?;
        self.client().delete(&endpoints::pet(id), Some(&token)).await
    }

    /// Submit an adoption request for a pet.
    #[instrument(skip(self, form), fields(%id))]
    pub async fn adopt_pet(&self, id: &ResourceId, form: &AdoptionForm) -> Result<AdoptionRequest> {
        let token = self.require_bearer()?;
        self.client()
            .post(&endpoints::pet_adopt(id), form, Some(&token))
            .await
    }

    /// Mark a pet as adopted.
    #[instrument(skip(self), fields(%id))]
    pub async fn mark_adopted(&self, id: &ResourceId) -> Result<Pet> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::pet_adopted(id), Some(&token))
            .await
    }

    /// List one page of the caller's own listings.
    #[instrument(skip(self))]
    pub async fn my_pets(&self, page: Option<&PageToken>) -> Result<Page<Pet>> {
        let token = self.require_bearer()?;
        let envelope: endpoints::ListEnvelope<Pet> = self
            .client()
            .get(endpoints::MY_PETS, &ListParams::page(page), Some(&token))
            .await?;
        Ok(envelope.into_page())
    }

    /// Every pet on the platform, unpaginated (admin moderation view).
    #[instrument(skip(self))]
    pub async fn all_pets_admin(&self) -> Result<Vec<Pet>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::PETS_ADMIN, &NO_QUERY, Some(&token))
            .await
    }
}
