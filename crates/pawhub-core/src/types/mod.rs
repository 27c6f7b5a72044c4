//! Core value types for the PawHub platform.
//!
//! These types enforce their invariants at construction time, so invalid
//! states are unrepresentable further up the stack.

mod api_url;
mod resource_id;
mod species;
mod token;

pub use api_url::ApiUrl;
pub use resource_id::ResourceId;
pub use species::Species;
pub use token::AccessToken;
