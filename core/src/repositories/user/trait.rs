//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Emails passed in are expected to be normalized (lowercased and trimmed).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use atom_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("ravi@example.com").await? {
///     Some(user) => println!("Found {}", user.atom_id()),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check if a user exists with the given mobile number
    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(EmailAlreadyExists | MobileAlreadyRegistered))` - A unique key collided
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace the password hash of a user
    ///
    /// # Returns
    /// * `Ok(true)` - Password updated
    /// * `Ok(false)` - No user with that id
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, DomainError>;

    /// List every user, oldest first
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Case-insensitive substring search on username, email and mobile
    async fn search(&self, query: &str) -> Result<Vec<User>, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<u64, DomainError>;
}
