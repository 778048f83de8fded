//! Employee management web application library.
//!
//! Administrator registration, login and logout in front of an employee
//! listing. Exposed as a library so the CLI can reuse the administrator
//! service and the handlers can be tested without a server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
