//! CLI subcommand implementations.

pub mod authorizations;
pub mod user;
