//! Bcrypt helpers
//!
//! Hashing is CPU bound, so it runs on the blocking thread pool instead of
//! stalling an HTTP worker.

use crate::errors::{DomainError, DomainResult};

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(DomainError::internal)?
        .map_err(DomainError::internal)
}

/// Check a password against a bcrypt hash
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(DomainError::internal)?
        .map_err(DomainError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("Secr3t!pass", 4).await.unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("Secr3t!pass", &hash).await.unwrap());
        assert!(!verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("anything", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
