//! Administrator repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use emp_management_core::{AdministratorId, MailAddress};

use super::RepositoryError;
use crate::models::{Administrator, AdministratorRecord};

/// Persistence operations the administrator flows depend on.
#[async_trait]
pub trait AdministratorRepository: Send + Sync {
    /// Look up an administrator by mail address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn find_by_mail_address(
        &self,
        mail_address: &MailAddress,
    ) -> Result<Option<Administrator>, RepositoryError>;

    /// Persist a new administrator.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the mail address is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    async fn insert(&self, record: &AdministratorRecord) -> Result<Administrator, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct AdministratorRow {
    id: i32,
    name: String,
    mail_address: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = RepositoryError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let mail_address = MailAddress::parse(&row.mail_address).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid mail address in database: {e}"))
        })?;

        Ok(Self {
            id: AdministratorId::new(row.id),
            name: row.name,
            mail_address,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

/// `PostgreSQL`-backed administrator repository.
#[derive(Clone)]
pub struct PgAdministratorRepository {
    pool: PgPool,
}

impl PgAdministratorRepository {
    /// Create a new administrator repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdministratorRepository for PgAdministratorRepository {
    async fn find_by_mail_address(
        &self,
        mail_address: &MailAddress,
    ) -> Result<Option<Administrator>, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r"
            SELECT id, name, mail_address, password_hash, created_at
            FROM emp.administrator
            WHERE mail_address = $1
            ",
        )
        .bind(mail_address.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Administrator::try_from).transpose()
    }

    async fn insert(&self, record: &AdministratorRecord) -> Result<Administrator, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r"
            INSERT INTO emp.administrator (name, mail_address, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, mail_address, password_hash, created_at
            ",
        )
        .bind(&record.name)
        .bind(record.mail_address.as_str())
        .bind(&record.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("mail address already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Administrator::try_from(row)
    }
}
