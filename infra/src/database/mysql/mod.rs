//! MySQL repository implementations

mod registration_repository_impl;
mod user_repository_impl;

pub use registration_repository_impl::MySqlRegistrationRepository;
pub use user_repository_impl::MySqlUserRepository;

use atom_core::errors::DomainError;

/// Wrap a SQLx failure as a domain database error
pub(crate) fn query_failed(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

/// Build a `LIKE` pattern matching `needle` anywhere, escaping wildcards
pub(crate) fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
