//! Domain models.
//!
//! Row types live next to their queries in `db`; these are the validated
//! shapes the services and handlers work with.

pub mod administrator;
pub mod employee;
pub mod session;

pub use administrator::{Administrator, AdministratorRecord, NewAdministrator};
pub use employee::Employee;
pub use session::{CurrentAdministrator, session_keys};
