//! Administrator domain types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use emp_management_core::{AdministratorId, MailAddress};

/// A persisted administrator.
#[derive(Debug, Clone)]
pub struct Administrator {
    /// Primary key.
    pub id: AdministratorId,
    /// Display name.
    pub name: String,
    /// Login identifier, unique across administrators.
    pub mail_address: MailAddress,
    /// Argon2 PHC string. Never the plaintext password.
    pub password_hash: String,
    /// When the administrator registered.
    pub created_at: DateTime<Utc>,
}

/// An administrator about to be registered, password still in plaintext.
///
/// Built from the registration form and handed to
/// [`AdministratorService::insert`](crate::services::AdministratorService::insert),
/// which hashes the password before anything reaches the database.
#[derive(Debug)]
pub struct NewAdministrator {
    pub name: String,
    pub mail_address: MailAddress,
    pub password: SecretString,
}

/// The insert payload the repository persists.
#[derive(Debug, Clone)]
pub struct AdministratorRecord {
    pub name: String,
    pub mail_address: MailAddress,
    pub password_hash: String,
}
