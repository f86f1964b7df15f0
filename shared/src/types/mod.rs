//! Type definitions shared by the HTTP layer and its tests

pub mod response;

pub use response::{CountedResponse, HealthResponse, MessageResponse};
