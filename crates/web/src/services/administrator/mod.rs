//! Administrator service.
//!
//! Owns password handling: registration hashes with Argon2id, login verifies
//! against the stored PHC string. Handlers never see a hash.

mod error;

pub use error::ServiceError;

use std::sync::{Arc, LazyLock};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use emp_management_core::MailAddress;

use crate::db::{AdministratorRepository, RepositoryError};
use crate::models::{Administrator, AdministratorRecord, NewAdministrator};

/// Hash verified when no administrator matches, so a miss costs as much as
/// a wrong password.
static DUMMY_PASSWORD_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("emp-dummy-password").unwrap_or_default());

/// Registration and login for administrators.
#[derive(Clone)]
pub struct AdministratorService {
    administrators: Arc<dyn AdministratorRepository>,
}

impl AdministratorService {
    #[must_use]
    pub fn new(administrators: Arc<dyn AdministratorRepository>) -> Self {
        Self { administrators }
    }

    /// Register a new administrator.
    ///
    /// Callers are expected to have checked the mail address is free; the
    /// unique index still catches a concurrent registration that slipped in
    /// after that check.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::AlreadyRegistered` on a unique violation.
    /// Returns `ServiceError::PasswordHash` if hashing fails.
    /// Returns `ServiceError::Repository` for other database errors.
    pub async fn insert(&self, new: NewAdministrator) -> Result<Administrator, ServiceError> {
        let password_hash = hash_password(new.password.expose_secret())?;

        let record = AdministratorRecord {
            name: new.name,
            mail_address: new.mail_address,
            password_hash,
        };

        let admin = self
            .administrators
            .insert(&record)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ServiceError::AlreadyRegistered,
                other => ServiceError::Repository(other),
            })?;

        tracing::info!(administrator_id = %admin.id, "Administrator registered");
        Ok(admin)
    }

    /// Check a mail address and password.
    ///
    /// Returns `Ok(None)` for an unknown address, a malformed address or a
    /// wrong password alike, so callers cannot tell which one failed. A miss
    /// still runs one Argon2 verification.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` only if the lookup itself fails.
    pub async fn login(
        &self,
        mail_address: &str,
        password: &str,
    ) -> Result<Option<Administrator>, ServiceError> {
        let found = match MailAddress::parse(mail_address) {
            Ok(mail_address) => {
                self.administrators
                    .find_by_mail_address(&mail_address)
                    .await?
            }
            Err(_) => None,
        };

        let Some(admin) = found else {
            verify_password(password, &DUMMY_PASSWORD_HASH);
            return Ok(None);
        };

        if verify_password(password, &admin.password_hash) {
            Ok(Some(admin))
        } else {
            Ok(None)
        }
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ServiceError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// An unparseable hash is treated as a mismatch.
fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored administrator password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
