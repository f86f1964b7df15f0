//! MySQL implementation of the RegistrationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use atom_core::domain::entities::Registration;
use atom_core::errors::DomainError;
use atom_core::repositories::RegistrationRepository;

use super::{contains_pattern, query_failed};

const REGISTRATION_COLUMNS: &str =
    "id, user_id, username, email, evname, mobile, registration_date";

/// MySQL implementation of RegistrationRepository
pub struct MySqlRegistrationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRegistrationRepository {
    /// Create a new MySQL registration repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(value).map_err(|e| DomainError::Database {
            message: format!("Invalid UUID: {}", e),
        })
    }

    /// Convert database row to Registration entity
    fn row_to_registration(row: &MySqlRow) -> Result<Registration, DomainError> {
        let id: String = row.try_get("id").map_err(query_failed)?;
        let user_id: String = row.try_get("user_id").map_err(query_failed)?;

        Ok(Registration {
            id: Self::parse_uuid(&id)?,
            user_id: Self::parse_uuid(&user_id)?,
            username: row.try_get("username").map_err(query_failed)?,
            email: row.try_get("email").map_err(query_failed)?,
            evname: row.try_get("evname").map_err(query_failed)?,
            mobile: row.try_get("mobile").map_err(query_failed)?,
            registration_date: row
                .try_get::<DateTime<Utc>, _>("registration_date")
                .map_err(query_failed)?,
        })
    }

    async fn fetch_rows(&self, query: &str, bind: Option<&str>) -> Result<Vec<Registration>, DomainError> {
        let mut statement = sqlx::query(query);
        if let Some(value) = bind {
            statement = statement.bind(value);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_registration).collect()
    }
}

#[async_trait]
impl RegistrationRepository for MySqlRegistrationRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        let query = format!(
            "SELECT {} FROM registrations WHERE email = ? ORDER BY registration_date LIMIT 1",
            REGISTRATION_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_registration).transpose()
    }

    async fn create(&self, registration: Registration) -> Result<Registration, DomainError> {
        let query = r#"
            INSERT INTO registrations (
                id, user_id, username, email, evname, mobile, registration_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(registration.id.to_string())
            .bind(registration.user_id.to_string())
            .bind(&registration.username)
            .bind(&registration.email)
            .bind(&registration.evname)
            .bind(&registration.mobile)
            .bind(registration.registration_date)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(registration)
    }

    async fn update(&self, registration: Registration) -> Result<Registration, DomainError> {
        let query = r#"
            UPDATE registrations
            SET evname = ?, mobile = ?, registration_date = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&registration.evname)
            .bind(&registration.mobile)
            .bind(registration.registration_date)
            .bind(registration.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Registration".to_string(),
            });
        }

        Ok(registration)
    }

    async fn list_all(&self) -> Result<Vec<Registration>, DomainError> {
        let query = format!(
            "SELECT {} FROM registrations ORDER BY registration_date",
            REGISTRATION_COLUMNS
        );
        self.fetch_rows(&query, None).await
    }

    async fn find_mentioning(&self, event: &str) -> Result<Vec<Registration>, DomainError> {
        let query = format!(
            "SELECT {} FROM registrations WHERE LOWER(evname) LIKE ? ORDER BY registration_date",
            REGISTRATION_COLUMNS
        );
        let pattern = contains_pattern(&event.to_lowercase());
        self.fetch_rows(&query, Some(&pattern)).await
    }

    async fn registered_emails(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar("SELECT DISTINCT email FROM registrations ORDER BY email")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(count as u64)
    }

    async fn count_distinct_emails(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT email) FROM registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(count as u64)
    }
}
