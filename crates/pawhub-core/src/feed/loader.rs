//! Async driver for the feed state machine.

use tracing::{debug, instrument};

use crate::feed::state::{Feed, FeedPhase, MergeOutcome};
use crate::traits::{PageSource, Sentinel};
use crate::Result;

/// Drives a [`Feed`] against a [`PageSource`].
///
/// The loader owns the feed, so page N+1 is never requested before page
/// N's result has been merged: issuing a fetch requires `&mut self`, and
/// the state machine independently refuses tickets while one is in
/// flight.
pub struct FeedLoader<S: PageSource> {
    source: S,
    feed: Feed<S::Query, S::Item>,
}

impl<S: PageSource> FeedLoader<S> {
    /// Create a loader with an idle feed for the given query.
    pub fn new(source: S, query: S::Query) -> Self {
        Self {
            source,
            feed: Feed::new(query),
        }
    }

    /// The underlying accumulation.
    pub fn feed(&self) -> &Feed<S::Query, S::Item> {
        &self.feed
    }

    /// Mutable access to the accumulation, for optimistic patching.
    pub fn feed_mut(&mut self) -> &mut Feed<S::Query, S::Item> {
        &mut self.feed
    }

    /// The accumulated items, in arrival order.
    pub fn items(&self) -> &[S::Item] {
        self.feed.items()
    }

    /// Switch to a different query, discarding the accumulation if it
    /// actually differs. Returns true if a reset happened.
    pub fn set_query(&mut self, query: S::Query) -> bool {
        self.feed.set_query(query)
    }

    /// Load the first page if nothing has been fetched yet.
    ///
    /// Returns the number of items appended (zero when the feed had
    /// already started).
    pub async fn load_first(&mut self) -> Result<usize> {
        Ok(self.fetch_next().await?.unwrap_or(0))
    }

    /// React to the sentinel becoming visible.
    ///
    /// Fetches the next page if the feed permits it; `Ok(None)` means no
    /// fetch was issued (already in flight, or exhausted).
    pub async fn notify_visible(&mut self) -> Result<Option<usize>> {
        self.fetch_next().await
    }

    /// Run the feed to exhaustion, fetching a page each time the
    /// sentinel reports visibility.
    ///
    /// Stops when the collection is exhausted or the sentinel reports
    /// teardown. A failed fetch propagates to the caller with the
    /// accumulation left in its last good state; calling `run` again
    /// retries from there.
    #[instrument(skip_all)]
    pub async fn run(&mut self, sentinel: &mut dyn Sentinel) -> Result<()> {
        if self.feed.phase() == FeedPhase::Idle {
            self.load_first().await?;
        }
        while self.feed.has_more() {
            if !sentinel.became_visible().await {
                debug!("sentinel torn down, stopping");
                break;
            }
            self.notify_visible().await?;
        }
        Ok(())
    }

    async fn fetch_next(&mut self) -> Result<Option<usize>> {
        let Some(ticket) = self.feed.request_next() else {
            return Ok(None);
        };

        let query = self.feed.query().clone();
        match self.source.fetch_page(&query, ticket.token()).await {
            Ok(page) => match self.feed.apply_page(&ticket, page) {
                MergeOutcome::Merged { appended, .. } => Ok(Some(appended)),
                MergeOutcome::Stale => Ok(None),
            },
            Err(err) => {
                self.feed.fetch_failed(&ticket);
                Err(err)
            }
        }
    }
}
