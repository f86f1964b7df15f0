//! HTTP layer of the ATOM 2K26 backend
//!
//! Exposed as a library so integration tests can build the application
//! with in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
