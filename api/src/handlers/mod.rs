//! Request handling helpers shared by all routes

pub mod error;

pub use error::{expose_internal_errors, ApiError, ApiResult};
