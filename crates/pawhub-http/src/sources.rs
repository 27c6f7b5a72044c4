//! Page sources backing the core feed engine.

use async_trait::async_trait;

use pawhub_core::domain::{Campaign, CampaignQuery, Pet, PetQuery};
use pawhub_core::page::{Page, PageToken};
use pawhub_core::traits::PageSource;
use pawhub_core::Result;

use crate::session::Session;

/// The pet listing as a feed page source.
///
/// Pair with a [`FeedLoader`](pawhub_core::FeedLoader) to get the
/// accumulated, de-duplicated infinite listing.
#[derive(Debug, Clone)]
pub struct PetPages {
    session: Session,
}

impl PetPages {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl PageSource for PetPages {
    type Query = PetQuery;
    type Item = Pet;

    async fn fetch_page(&self, query: &PetQuery, token: Option<&PageToken>) -> Result<Page<Pet>> {
        self.session.list_pets(query, token).await
    }
}

/// The campaign listing as a feed page source.
#[derive(Debug, Clone)]
pub struct CampaignPages {
    session: Session,
}

impl CampaignPages {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl PageSource for CampaignPages {
    type Query = CampaignQuery;
    type Item = Campaign;

    async fn fetch_page(
        &self,
        query: &CampaignQuery,
        token: Option<&PageToken>,
    ) -> Result<Page<Campaign>> {
        self.session.list_campaigns(query, token).await
    }
}
