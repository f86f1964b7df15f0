//! Repository interfaces and in-memory implementations.
//!
//! The MySQL implementations live in the infrastructure crate; the mock
//! repositories back unit tests and HTTP tests.

pub mod registration;
pub mod user;

pub use registration::{MockRegistrationRepository, RegistrationRepository};
pub use user::{MockUserRepository, UserRepository};
