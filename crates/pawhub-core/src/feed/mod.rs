//! The infinite feed engine.
//!
//! [`Feed`] is the sans-IO state machine that accumulates pages into one
//! ordered, de-duplicated list; [`FeedLoader`] drives it against a
//! [`PageSource`](crate::traits::PageSource) and a
//! [`Sentinel`](crate::traits::Sentinel).

mod loader;
mod state;

pub use loader::FeedLoader;
pub use state::{Feed, FeedPhase, FetchTicket, MergeOutcome};
