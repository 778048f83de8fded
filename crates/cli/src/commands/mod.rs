//! CLI subcommand implementations.

pub mod admin;
pub mod migrate;

use secrecy::SecretString;

/// Read the database URL the same way the web binary does.
fn database_url() -> Result<SecretString, MissingDatabaseUrl> {
    dotenvy::dotenv().ok();

    std::env::var("EMP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MissingDatabaseUrl)
}

/// Neither `EMP_DATABASE_URL` nor `DATABASE_URL` is set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: EMP_DATABASE_URL (or DATABASE_URL)")]
pub struct MissingDatabaseUrl;
