//! Employee domain type.

use chrono::NaiveDate;

use emp_management_core::{EmployeeId, MailAddress};

/// An employee as shown in the listing.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub mail_address: MailAddress,
    pub hire_date: NaiveDate,
    pub dependents_count: i32,
}

impl Employee {
    /// Hire date formatted for display, e.g. `2019-04-01`.
    #[must_use]
    pub fn hire_date_display(&self) -> String {
        self.hire_date.format("%Y-%m-%d").to_string()
    }
}
