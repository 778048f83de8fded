//! Domain newtypes.

pub mod id;
pub mod mail_address;

pub use id::{AdministratorId, EmployeeId};
pub use mail_address::{MailAddress, MailAddressError};
