//! Roster Engine library.
//!
//! Server-side code for the character registry.
//!
//! ## Structure
//!
//! - `use_cases/` - Registry operations and input validation
//! - `infrastructure/` - Storage port and its SQLite/in-memory adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
