//! Unified error handling with Sentry integration.
//!
//! Validation and credential failures are rendered back into their forms by
//! the handlers and never reach this type. `AppError` is what is left:
//! infrastructure failures, which are captured to Sentry and answered with a
//! generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::ServiceError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Administrator service failed.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Tag Sentry events from the current request with the administrator.
///
/// Each request runs on its own hub, so this is called per authenticated
/// request rather than once at login.
pub fn set_sentry_user(id: &impl ToString, mail_address: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(id.to_string()),
            email: Some(mail_address.to_owned()),
            ..Default::default()
        }));
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Internal("template".to_string());
        assert_eq!(err.to_string(), "Internal error: template");

        let err = AppError::Database(RepositoryError::Conflict("dup".to_string()));
        assert_eq!(err.to_string(), "Database error: constraint violation: dup");
    }

    #[test]
    fn test_every_variant_is_a_server_error() {
        let errors = [
            AppError::Internal("x".to_string()),
            AppError::Database(RepositoryError::DataCorruption("x".to_string())),
            AppError::Service(ServiceError::PasswordHash),
            AppError::Session(tower_sessions::session::Error::Store(
                tower_sessions::session_store::Error::Backend("down".to_string()),
            )),
        ];
        for err in errors {
            assert_eq!(
                err.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[tokio::test]
    async fn test_response_hides_details() {
        let response =
            AppError::Internal("connection refused on 10.0.0.5".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[test]
    fn test_set_sentry_user_tags_events() {
        let events = sentry::test::with_captured_events(|| {
            set_sentry_user(&7, "a@x.com");
            sentry::capture_message("after login", sentry::Level::Info);
        });

        let user = events[0].user.as_ref().unwrap();
        assert_eq!(user.id.as_deref(), Some("7"));
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
    }
}
