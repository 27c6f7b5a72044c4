//! pawhub-core - Core types, traits, and the feed engine for the PawHub
//! pet adoption and donation platform client.
//!
//! This crate is runtime- and transport-agnostic. It holds the validated
//! value types, the domain records, the infinite-feed state machine, the
//! optimistic mutation ledger, and the pure derived-metric calculators.
//! HTTP lives in `pawhub-http`.

pub mod domain;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod optimistic;
pub mod page;
pub mod traits;
pub mod types;

pub use domain::{
    AdoptionRequest, Campaign, Donation, Keyed, Pet, RequestStatus, Role, User,
};
pub use domain::{CampaignQuery, PetQuery};
pub use error::Error;
pub use feed::{Feed, FeedLoader, FeedPhase, FetchTicket, MergeOutcome};
pub use metrics::Currency;
pub use optimistic::{mutate, MutationLedger, MutationTicket, Patchable};
pub use page::{Page, PageToken};
pub use traits::{PageSource, Sentinel};
pub use types::{AccessToken, ApiUrl, ResourceId, Species};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
