//! Domain records of the platform.
//!
//! These are the client-side shapes of the records the backend serves.
//! Wire names are camelCase with Mongo-style `_id` identifiers; optional
//! fields are tolerated liberally since the backend evolved field by
//! field.

mod adoption;
mod campaign;
mod pet;
mod query;
mod user;

pub use adoption::{AdoptionRequest, RequestStatus};
pub use campaign::{Campaign, Donation};
pub use pet::Pet;
pub use query::{CampaignQuery, PetQuery};
pub use user::{Role, User};

use crate::types::ResourceId;

/// A record with a stable, unique identifier.
///
/// The feed de-duplicates on this key, so it must not change over the
/// record's lifetime.
pub trait Keyed {
    /// The record's unique identifier.
    fn key(&self) -> &ResourceId;
}
