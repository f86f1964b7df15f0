//! # ATOM 2K26 Core
//!
//! Core business logic and domain layer for the ATOM 2K26 event registration backend.
//! This crate contains domain entities, the one-time password store, the mail
//! fallback engine, business services, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
