//! Walletdesk Core - Domain entities, services, and traits.
//!
//! This crate contains the analytics business logic for Walletdesk.
//! It is transport-agnostic and defines the data-source trait that is
//! implemented by the `connect` crate.

pub mod analytics;
pub mod constants;
pub mod errors;

// Re-export common types from the analytics module
pub use analytics::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
