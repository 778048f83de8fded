//! Business logic services.
//!
//! - `administrator` - Administrator registration and password login

pub mod administrator;

pub use administrator::{AdministratorService, ServiceError};
