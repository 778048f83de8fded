//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET       /                    - Login page
//! POST      /login               - Login action (renders the employee list on success)
//! GET       /toInsert            - Registration page
//! POST      /insert              - Registration action (303 to / on success)
//! GET|POST  /logout              - Destroy session, 303 to /
//! GET|POST  /employee/showList   - Employee list (requires login)
//! GET       /health              - Liveness
//! GET       /health/ready        - Database readiness
//! ```

pub mod administrator;
pub mod employee;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(administrator::to_login))
        .route("/login", post(administrator::login))
        .route("/toInsert", get(administrator::to_insert))
        .route("/insert", post(administrator::insert))
        .route(
            "/logout",
            get(administrator::logout).post(administrator::logout),
        )
        .route(
            "/employee/showList",
            get(employee::show_list).post(employee::show_list),
        )
}
