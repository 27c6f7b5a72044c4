//! Feed accumulation state machine.
//!
//! The state machine is sans-IO: it hands out [`FetchTicket`]s describing
//! the page to fetch and consumes the results, but never performs a fetch
//! itself. That keeps every transition synchronously testable.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::Keyed;
use crate::page::{Page, PageToken};
use crate::types::ResourceId;

/// Phase of an accumulation.
///
/// `Idle -> Loading -> Ready -> FetchingMore -> Ready -> ... -> Exhausted`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// Nothing fetched yet (also the state after a query change).
    Idle,
    /// First page in flight.
    Loading,
    /// Items present, a next-page token on hand.
    Ready,
    /// A follow-up page in flight.
    FetchingMore,
    /// The server reported no further pages. Terminal.
    Exhausted,
}

/// Permission to fetch one page, stamped with the epoch it was issued in.
///
/// A ticket from before a query change carries a stale epoch, so its
/// result is discarded on arrival rather than merged into the new query's
/// accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    token: Option<PageToken>,
}

impl FetchTicket {
    /// The page token to fetch with; `None` requests the first page.
    pub fn token(&self) -> Option<&PageToken> {
        self.token.as_ref()
    }
}

/// Result of offering a fetched page to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The page was merged.
    Merged {
        /// Items appended to the list.
        appended: usize,
        /// Items skipped because their identifier was already present.
        skipped: usize,
    },
    /// The ticket's query context is gone; the page was discarded.
    Stale,
}

/// A growing, de-duplicated, ordered accumulation of pages for one query.
///
/// Owned exclusively by one logical listing; all mutation goes through
/// the methods here, so the invariants (unique identifiers, arrival
/// order, terminal exhaustion) hold by construction.
#[derive(Debug)]
pub struct Feed<Q, T> {
    query: Q,
    epoch: u64,
    phase: FeedPhase,
    items: Vec<T>,
    seen: HashSet<ResourceId>,
    next: Option<PageToken>,
    total: Option<u64>,
}

impl<Q, T> Feed<Q, T>
where
    Q: Clone + PartialEq,
    T: Keyed,
{
    /// Create an idle feed for the given query.
    pub fn new(query: Q) -> Self {
        Self {
            query,
            epoch: 0,
            phase: FeedPhase::Idle,
            items: Vec::new(),
            seen: HashSet::new(),
            next: None,
            total: None,
        }
    }

    /// The query this accumulation belongs to.
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Current phase.
    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    /// The accumulated items, in arrival order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total count across all pages, if the server reported one.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// False once the server reported no further pages.
    pub fn has_more(&self) -> bool {
        self.phase != FeedPhase::Exhausted
    }

    /// True while a page is in flight.
    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading | FeedPhase::FetchingMore)
    }

    /// Mutable access to one accumulated item, for optimistic patching.
    pub fn item_mut(&mut self, id: &ResourceId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == id)
    }

    /// Ask permission to fetch the next page.
    ///
    /// Issues a ticket only from `Idle` (first page) or from `Ready` with
    /// a token on hand. While a fetch is in flight, and once exhausted,
    /// this returns `None` — rapid repeat visibility signals therefore
    /// cannot trigger duplicate or post-exhaustion fetches.
    pub fn request_next(&mut self) -> Option<FetchTicket> {
        match self.phase {
            FeedPhase::Idle => {
                self.phase = FeedPhase::Loading;
                trace!(epoch = self.epoch, "first page requested");
                Some(FetchTicket {
                    epoch: self.epoch,
                    token: None,
                })
            }
            FeedPhase::Ready => self.next.clone().map(|token| {
                self.phase = FeedPhase::FetchingMore;
                trace!(epoch = self.epoch, %token, "next page requested");
                FetchTicket {
                    epoch: self.epoch,
                    token: Some(token),
                }
            }),
            FeedPhase::Loading | FeedPhase::FetchingMore | FeedPhase::Exhausted => None,
        }
    }

    /// Merge a fetched page into the accumulation.
    ///
    /// Items whose identifier is already present are skipped, so offering
    /// the same page twice is idempotent. A ticket issued before the last
    /// query change is stale and its page is discarded untouched.
    pub fn apply_page(&mut self, ticket: &FetchTicket, page: Page<T>) -> MergeOutcome {
        if ticket.epoch != self.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "discarding stale page"
            );
            return MergeOutcome::Stale;
        }

        let mut appended = 0;
        let mut skipped = 0;
        for item in page.items {
            if self.seen.insert(item.key().clone()) {
                self.items.push(item);
                appended += 1;
            } else {
                skipped += 1;
            }
        }

        self.total = page.total.or(self.total);
        self.next = page.next;
        self.phase = if self.next.is_none() {
            FeedPhase::Exhausted
        } else {
            FeedPhase::Ready
        };

        debug!(
            appended,
            skipped,
            len = self.items.len(),
            phase = ?self.phase,
            "page merged"
        );
        MergeOutcome::Merged { appended, skipped }
    }

    /// Record that the ticket's fetch failed.
    ///
    /// The accumulation stays in its last good state: a failed first page
    /// returns to `Idle` (retry restarts from page one), a failed
    /// follow-up returns to `Ready` with the token intact so the next
    /// visibility signal retries it. Stale tickets are ignored.
    pub fn fetch_failed(&mut self, ticket: &FetchTicket) {
        if ticket.epoch != self.epoch {
            return;
        }
        match self.phase {
            FeedPhase::Loading => self.phase = FeedPhase::Idle,
            FeedPhase::FetchingMore => self.phase = FeedPhase::Ready,
            _ => {}
        }
    }

    /// Switch to a different query.
    ///
    /// Equal queries are a no-op. Otherwise the accumulated list is
    /// discarded synchronously and the epoch advances, so any in-flight
    /// page from the old query is rejected when it arrives. Returns true
    /// if a reset happened.
    pub fn set_query(&mut self, query: Q) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.items.clear();
        self.seen.clear();
        self.next = None;
        self.total = None;
        self.epoch += 1;
        self.phase = FeedPhase::Idle;
        debug!(epoch = self.epoch, "query changed, accumulation reset");
        true
    }
}
