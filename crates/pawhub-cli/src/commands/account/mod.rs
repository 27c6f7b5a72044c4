//! Account and session commands.

pub mod login;
pub mod logout;
pub mod whoami;
