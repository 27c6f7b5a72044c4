//! Campaign and donation operations.

use tracing::{debug, instrument};

use pawhub_core::domain::{Campaign, CampaignQuery};
use pawhub_core::page::{Page, PageToken};
use pawhub_core::types::ResourceId;
use pawhub_core::Result;

use crate::endpoints::{self, DonateRequest, ListParams, NewCampaign, NO_QUERY};
use crate::session::Session;

impl Session {
    /// List one page of active donation campaigns.
    #[instrument(skip(self))]
    pub async fn list_campaigns(
        &self,
        query: &CampaignQuery,
        page: Option<&PageToken>,
    ) -> Result<Page<Campaign>> {
        debug!("listing campaigns");
        let params = ListParams {
            page: page.map(PageToken::as_str),
            limit: None,
            search: query.search.as_deref(),
            category: None,
        };

        let envelope: endpoints::ListEnvelope<Campaign> = self
            .client()
            .get(endpoints::DONATIONS, &params, self.bearer().as_deref())
            .await?;
        Ok(envelope.into_page())
    }

    /// Fetch one campaign, with its donations, by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get_campaign(&self, id: &ResourceId) -> Result<Campaign> {
        self.client()
            .get(&endpoints::campaign(id), &NO_QUERY, self.bearer().as_deref())
            .await
    }

    /// Create a campaign.
    #[instrument(skip(self, campaign))]
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign> {
        let token = self.require_bearer()?;
        self.client()
            .post(endpoints::DONATIONS, campaign, Some(&token))
            .await
    }

    /// Replace a campaign's editable fields.
    #[instrument(skip(self, campaign), fields(%id))]
    pub async fn update_campaign(
        &self,
        id: &ResourceId,
        campaign: &NewCampaign,
    ) -> Result<Campaign> {
        let token = self.require_bearer()?;
        self.client()
            .put(&endpoints::campaign(id), campaign, Some(&token))
            .await
    }

    /// Delete a campaign.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_campaign(&self, id: &ResourceId) -> Result<()> {
        let token = self.require_bearer()?;
        self.client()
            .delete(&endpoints::campaign(id), Some(&token))
            .await
    }

    /// Toggle a campaign's paused flag. Returns the updated campaign.
    #[instrument(skip(self), fields(%id))]
    pub async fn pause_campaign(&self, id: &ResourceId) -> Result<Campaign> {
        let token = self.require_bearer()?;
        self.client()
            .patch(&endpoints::campaign_pause(id), Some(&token))
            .await
    }

    /// Donate to a campaign.
    ///
    /// The request carries the payment provider's method token; raw card
    /// data never reaches this client. Returns the updated campaign.
    #[instrument(skip(self, donation), fields(%id))]
    pub async fn donate(&self, id: &ResourceId, donation: &DonateRequest) -> Result<Campaign> {
        let token = self.require_bearer()?;
        self.client()
            .post(&endpoints::campaign_donate(id), donation, Some(&token))
            .await
    }

    /// Ask for the caller's donation to this campaign to be refunded.
    ///
    /// The server flags the donation; the campaign creator processes it.
    #[instrument(skip(self), fields(%id))]
    pub async fn request_refund(&self, id: &ResourceId) -> Result<()> {
        let token = self.require_bearer()?;
        self.client()
            .delete(&endpoints::campaign_refund(id), Some(&token))
            .await
    }

    /// Campaigns created by the caller, with their donations.
    #[instrument(skip(self))]
    pub async fn my_campaigns(&self) -> Result<Vec<Campaign>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::MY_CAMPAIGNS, &NO_QUERY, Some(&token))
            .await
    }

    /// Campaigns the caller donated to, with their donations.
    #[instrument(skip(self))]
    pub async fn my_donations(&self) -> Result<Vec<Campaign>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::MY_DONATIONS, &NO_QUERY, Some(&token))
            .await
    }

    /// Campaigns recommended alongside the given one.
    #[instrument(skip(self), fields(%id))]
    pub async fn recommended_campaigns(&self, id: &ResourceId) -> Result<Vec<Campaign>> {
        self.client()
            .get(
                &endpoints::campaign_recommended(id),
                &NO_QUERY,
                self.bearer().as_deref(),
            )
            .await
    }

    /// Every campaign on the platform, unpaginated (admin moderation
    /// view).
    #[instrument(skip(self))]
    pub async fn all_campaigns_admin(&self) -> Result<Vec<Campaign>> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::DONATIONS_ADMIN, &NO_QUERY, Some(&token))
            .await
    }
}
