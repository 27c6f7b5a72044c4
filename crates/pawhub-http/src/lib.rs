//! pawhub-http - reqwest-backed client for the PawHub platform API.
//!
//! [`Session`] is the entry point: an explicitly injected session context
//! carrying the API base URL and the bearer credential, exposing every
//! platform operation. [`PetPages`] and [`CampaignPages`] feed the core
//! feed engine from the list endpoints; [`ImageHost`] uploads images to
//! the third-party hosting boundary.

mod adoptions;
mod campaigns;
mod client;
mod endpoints;
mod pets;
mod session;
mod sources;
mod upload;
mod users;

pub use endpoints::{
    AdoptionForm, DonateRequest, NewCampaign, NewPet, ProfileUpdate, RegisterRequest,
};
pub use session::Session;
pub use sources::{CampaignPages, PetPages};
pub use upload::ImageHost;
