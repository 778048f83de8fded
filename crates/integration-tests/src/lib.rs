//! Integration tests for the employee management application.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations and start the server
//! cargo run -p emp-management-cli -- migrate
//! cargo run -p emp-management-web
//!
//! # Run the ignored end-to-end tests
//! cargo test -p emp-management-integration-tests -- --ignored
//! ```
//!
//! The server address is read from `EMP_BASE_URL` (default
//! `http://localhost:8080`).

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use reqwest::redirect::Policy;

/// Base URL of the running server.
#[must_use]
pub fn base_url() -> String {
    std::env::var("EMP_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// HTTP client that keeps cookies and does not follow redirects.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
}

/// Mail address that has not been used by a previous run.
#[must_use]
pub fn unique_mail_address(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("{prefix}-{nanos}@example.com")
}
