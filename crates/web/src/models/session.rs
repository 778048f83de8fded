//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use emp_management_core::{AdministratorId, MailAddress};

use super::Administrator;

/// Session-stored administrator identity.
///
/// Only what the pages need. The password hash never enters the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentAdministrator {
    pub id: AdministratorId,
    pub name: String,
    pub mail_address: MailAddress,
}

impl From<&Administrator> for CurrentAdministrator {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            mail_address: admin.mail_address.clone(),
        }
    }
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the logged-in administrator.
    pub const CURRENT_ADMINISTRATOR: &str = "current_administrator";
}
