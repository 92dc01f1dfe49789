//! Use cases - User story orchestration.

pub mod registry;
pub mod validation;

pub use registry::{CharacterRegistry, RegistryError};
pub use validation::ValidationError;
