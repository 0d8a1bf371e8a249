//! Types shared across the crate: the entity model, configuration, and the
//! user-facing validation error taxonomy.

pub mod config;
pub mod error;
pub mod model;

pub use error::ValidationError;
