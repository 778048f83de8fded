//! Employee repository (read-only).

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use emp_management_core::{EmployeeId, MailAddress};

use super::RepositoryError;
use crate::models::Employee;

/// Read access to employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees, most recently hired first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    name: String,
    mail_address: String,
    hire_date: NaiveDate,
    dependents_count: i32,
}

/// `PostgreSQL`-backed employee repository.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r"
            SELECT id, name, mail_address, hire_date, dependents_count
            FROM emp.employee
            ORDER BY hire_date DESC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut employees = Vec::with_capacity(rows.len());
        for r in rows {
            let mail_address = MailAddress::parse(&r.mail_address).map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid mail address for employee {}: {e}",
                    r.id
                ))
            })?;

            employees.push(Employee {
                id: EmployeeId::new(r.id),
                name: r.name,
                mail_address,
                hire_date: r.hire_date,
                dependents_count: r.dependents_count,
            });
        }

        Ok(employees)
    }
}
