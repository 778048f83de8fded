//! Employee listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdministrator;
use crate::models::{CurrentAdministrator, Employee};
use crate::state::AppState;

/// Employee listing page.
#[derive(Template, WebTemplate)]
#[template(path = "employee/list.html")]
pub struct EmployeeListTemplate {
    pub administrator: CurrentAdministrator,
    pub employees: Vec<Employee>,
}

/// Display all employees.
///
/// GET|POST /employee/showList
pub async fn show_list(
    State(state): State<AppState>,
    RequireAdministrator(administrator): RequireAdministrator,
) -> Result<Response> {
    render_list(&state, administrator).await
}

/// Render the listing for an already-authenticated administrator.
///
/// Also the continuation of a successful login.
pub(crate) async fn render_list(
    state: &AppState,
    administrator: CurrentAdministrator,
) -> Result<Response> {
    let employees = state.employees().find_all().await?;

    Ok(EmployeeListTemplate {
        administrator,
        employees,
    }
    .into_response())
}
