//! Administrator registration, login and logout.
//!
//! Validation and credential failures re-render the originating form with
//! messages. Only infrastructure failures become an [`AppError`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use emp_management_core::MailAddress;

use crate::error::{AppError, Result, set_sentry_user};
use crate::filters;
use crate::forms::{FieldErrors, InsertAdministratorForm, LoginForm, fields};
use crate::middleware::{clear_current_administrator, set_current_administrator};
use crate::models::CurrentAdministrator;
use crate::routes::employee;
use crate::services::ServiceError;
use crate::state::AppState;

/// Shown for any rejected login. Deliberately does not say which field was wrong.
pub const LOGIN_FAILED_MESSAGE: &str = "Mail address or password is invalid";

/// Attached to the mail address field when it is already taken.
pub const ALREADY_REGISTERED_MESSAGE: &str = "This mail address is already registered";

/// Attached to the confirmation field when it differs from the password.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

// =============================================================================
// Templates
// =============================================================================

/// Registration page. Passwords are never echoed back.
#[derive(Template, WebTemplate)]
#[template(path = "administrator/insert.html")]
pub struct RegistrationTemplate {
    pub name: String,
    pub mail_address: String,
    pub errors: FieldErrors,
}

impl RegistrationTemplate {
    fn new(form: &InsertAdministratorForm, errors: FieldErrors) -> Self {
        Self {
            name: form.name.clone(),
            mail_address: form.mail_address.clone(),
            errors,
        }
    }
}

/// Login page.
#[derive(Template, WebTemplate)]
#[template(path = "administrator/login.html")]
pub struct LoginTemplate {
    pub mail_address: String,
    pub error_message: Option<String>,
}

// =============================================================================
// Registration
// =============================================================================

/// Display the registration page with an empty form.
///
/// GET /toInsert
pub async fn to_insert() -> impl IntoResponse {
    RegistrationTemplate::new(&InsertAdministratorForm::default(), FieldErrors::new())
}

/// Handle registration form submission.
///
/// POST /insert
pub async fn insert(
    State(state): State<AppState>,
    Form(form): Form<InsertAdministratorForm>,
) -> Result<Response> {
    let mut errors = form.validate();
    if errors.has_errors() {
        return Ok(RegistrationTemplate::new(&form, errors).into_response());
    }

    let mail_address = MailAddress::parse(&form.mail_address)
        .map_err(|e| AppError::Internal(format!("validated mail address failed to parse: {e}")))?;

    if state
        .administrators()
        .find_by_mail_address(&mail_address)
        .await?
        .is_some()
    {
        errors.add(fields::MAIL_ADDRESS, ALREADY_REGISTERED_MESSAGE);
    }

    if !form.passwords_match() {
        errors.add(fields::REPASSWORD, PASSWORD_MISMATCH_MESSAGE);
    }

    if errors.has_errors() {
        tracing::debug!(?errors, "Registration rejected");
        return Ok(RegistrationTemplate::new(&form, errors).into_response());
    }

    let new_admin = form
        .clone()
        .into_new_administrator()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match state.administrator_service().insert(new_admin).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ServiceError::AlreadyRegistered) => {
            // Lost the race against a concurrent registration
            errors.add(fields::MAIL_ADDRESS, ALREADY_REGISTERED_MESSAGE);
            Ok(RegistrationTemplate::new(&form, errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Login
// =============================================================================

/// Display the login page.
///
/// GET /
pub async fn to_login() -> impl IntoResponse {
    LoginTemplate {
        mail_address: String::new(),
        error_message: None,
    }
}

/// Handle login form submission.
///
/// On success the employee listing is rendered within this same request
/// rather than redirecting.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let Some(admin) = state
        .administrator_service()
        .login(&form.mail_address, &form.password)
        .await?
    else {
        tracing::info!(mail_address = %form.mail_address, "Login failed");
        return Ok(LoginTemplate {
            mail_address: form.mail_address,
            error_message: Some(LOGIN_FAILED_MESSAGE.to_owned()),
        }
        .into_response());
    };

    let current = CurrentAdministrator::from(&admin);
    set_current_administrator(&session, &current).await?;
    set_sentry_user(&admin.id, admin.mail_address.as_str());
    tracing::info!(administrator_id = %admin.id, "Administrator logged in");

    employee::render_list(&state, current).await
}

// =============================================================================
// Logout
// =============================================================================

/// Destroy the session and return to the login page.
///
/// GET|POST /logout
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_current_administrator(&session).await {
        tracing::error!("Failed to flush session: {}", e);
    }
    tracing::info!("Administrator logged out");

    Redirect::to("/")
}
