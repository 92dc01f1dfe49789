//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (SQLite on disk, or in memory for tests and scratch servers)

mod error;
mod repos;

pub use error::RepoError;
pub use repos::*;
