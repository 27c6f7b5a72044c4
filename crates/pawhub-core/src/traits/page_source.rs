//! Paginated collection fetcher trait.

use async_trait::async_trait;

use crate::domain::Keyed;
use crate::page::{Page, PageToken};
use crate::Result;

/// Fetches one page of a listed collection.
///
/// Implementations normalize whatever envelope the backend uses into
/// [`Page`]. They must not retry, cache, or swallow errors: a failed
/// fetch propagates unchanged and the caller decides retry policy.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Immutable filter value; inequality means a different logical
    /// collection.
    type Query: Clone + PartialEq + Send + Sync;

    /// The collection's item type.
    type Item: Keyed + Send;

    /// Fetch one page. `token` of `None` requests the first page.
    async fn fetch_page(
        &self,
        query: &Self::Query,
        token: Option<&PageToken>,
    ) -> Result<Page<Self::Item>>;
}
