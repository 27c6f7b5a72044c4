//! Subcommand implementations.

pub mod account;
pub mod adoptions;
pub mod campaigns;
pub mod pets;
pub mod users;
