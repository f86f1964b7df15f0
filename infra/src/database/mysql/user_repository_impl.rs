//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use atom_core::domain::entities::User;
use atom_core::errors::{AuthError, DomainError};
use atom_core::repositories::UserRepository;

use super::{contains_pattern, query_failed};

const USER_COLUMNS: &str =
    "id, username, email, mobile, password_hash, college, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(query_failed)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(query_failed)?,
            email: row.try_get("email").map_err(query_failed)?,
            mobile: row.try_get("mobile").map_err(query_failed)?,
            password_hash: row.try_get("password_hash").map_err(query_failed)?,
            college: row.try_get("college").map_err(query_failed)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(query_failed)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(query_failed)?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            USER_COLUMNS, column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM users WHERE {} = ?)", column);

        let exists: i64 = sqlx::query_scalar(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(exists != 0)
    }

    /// Map a unique-key collision to the matching domain error
    fn map_insert_error(e: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return if db_err.message().contains("mobile") {
                    AuthError::MobileAlreadyRegistered.into()
                } else {
                    AuthError::EmailAlreadyExists.into()
                };
            }
        }
        query_failed(e)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", &id.to_string()).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists("email", email).await
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, DomainError> {
        self.exists("mobile", mobile).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, mobile, password_hash, college, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.mobile)
            .bind(&user.password_hash)
            .bind(&user.college)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(user)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, DomainError> {
        let query = "UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY created_at", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn search(&self, query_text: &str) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users \
             WHERE LOWER(username) LIKE ? OR LOWER(email) LIKE ? OR mobile LIKE ? \
             ORDER BY created_at",
            USER_COLUMNS
        );
        let pattern = contains_pattern(&query_text.trim().to_lowercase());

        let rows = sqlx::query(&query)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(count as u64)
    }
}
