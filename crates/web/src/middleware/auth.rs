//! Authentication extractor and session helpers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::set_sentry_user;
use crate::models::{CurrentAdministrator, session_keys};

/// Extractor that requires a logged-in administrator.
///
/// Anonymous requests are redirected to the login page. Authenticated ones
/// tag the request's Sentry scope with the administrator.
///
/// ```rust,ignore
/// async fn handler(RequireAdministrator(admin): RequireAdministrator) -> String {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdministrator(pub CurrentAdministrator);

/// Rejection for [`RequireAdministrator`].
#[derive(Debug)]
pub enum AuthRejection {
    /// No administrator in the session.
    RedirectToLogin,
    /// The session layer is missing from the stack.
    MissingSessionLayer,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/").into_response(),
            Self::MissingSessionLayer => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdministrator
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::MissingSessionLayer)?;

        let admin = current_administrator(session)
            .await
            .ok_or(AuthRejection::RedirectToLogin)?;

        set_sentry_user(&admin.id, admin.mail_address.as_str());
        Ok(Self(admin))
    }
}

/// Read the logged-in administrator, if any.
///
/// A session store error reads as "not logged in".
pub async fn current_administrator(session: &Session) -> Option<CurrentAdministrator> {
    match session
        .get::<CurrentAdministrator>(session_keys::CURRENT_ADMINISTRATOR)
        .await
    {
        Ok(admin) => admin,
        Err(e) => {
            tracing::warn!("Failed to read administrator from session: {}", e);
            None
        }
    }
}

/// Store the logged-in administrator in the session.
///
/// The session ID is cycled first so an ID issued before login is never
/// reused for the authenticated session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_administrator(
    session: &Session,
    admin: &CurrentAdministrator,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_ADMINISTRATOR, admin)
        .await
}

/// Destroy the whole session (logout).
///
/// Flushing an empty or already-flushed session is a no-op.
///
/// # Errors
///
/// Returns an error if the session store cannot delete the record.
pub async fn clear_current_administrator(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
