//! Administrator management commands.
//!
//! ```bash
//! emp-cli admin create -n "Taro Yamada" -e taro@example.com
//! ```
//!
//! The password is read from `--password` or `EMP_ADMIN_PASSWORD`. The same
//! rules as the registration page apply: required fields, a well-formed and
//! unused mail address.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use emp_management_core::AdministratorId;
use emp_management_web::db::{self, AdministratorRepository, PgAdministratorRepository};
use emp_management_web::forms::InsertAdministratorForm;
use emp_management_web::services::{AdministratorService, ServiceError};

use super::{MissingDatabaseUrl, database_url};

/// Errors that can occur during administrator operations.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// One or more fields failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Administrator already exists with mail address: {0}")]
    AlreadyRegistered(String),

    #[error("Database error: {0}")]
    Repository(#[from] db::RepositoryError),

    #[error("Service error: {0}")]
    Service(ServiceError),
}

/// Create an administrator in the configured database.
///
/// # Errors
///
/// Returns `AdminError` if the input is invalid, the mail address is taken or
/// the database fails.
pub async fn create(
    name: &str,
    mail_address: &str,
    password: &SecretString,
) -> Result<AdministratorId, AdminError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;
    let repository: Arc<dyn AdministratorRepository> = Arc::new(PgAdministratorRepository::new(pool));

    register(repository, name, mail_address, password).await
}

/// Validate, check uniqueness and insert.
async fn register(
    repository: Arc<dyn AdministratorRepository>,
    name: &str,
    mail_address: &str,
    password: &SecretString,
) -> Result<AdministratorId, AdminError> {
    let form = InsertAdministratorForm {
        name: name.to_owned(),
        mail_address: mail_address.to_owned(),
        password: password.expose_secret().to_owned(),
        repassword: password.expose_secret().to_owned(),
    };

    let errors = form.validate();
    if errors.has_errors() {
        let summary = errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AdminError::InvalidInput(summary));
    }

    let new_admin = form
        .into_new_administrator()
        .map_err(|e| AdminError::InvalidInput(e.to_string()))?;

    if repository
        .find_by_mail_address(&new_admin.mail_address)
        .await?
        .is_some()
    {
        return Err(AdminError::AlreadyRegistered(
            new_admin.mail_address.into_inner(),
        ));
    }

    let taken = new_admin.mail_address.to_string();
    let admin = AdministratorService::new(repository)
        .insert(new_admin)
        .await
        .map_err(|e| match e {
            ServiceError::AlreadyRegistered => AdminError::AlreadyRegistered(taken),
            other => AdminError::Service(other),
        })?;

    tracing::info!(
        "Administrator created successfully! ID: {}, Mail address: {}",
        admin.id,
        admin.mail_address
    );

    Ok(admin.id)
}
