//! In-memory repositories for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use emp_management_core::AdministratorId;
use emp_management_core::MailAddress;

use super::{AdministratorRepository, EmployeeRepository, RepositoryError};
use crate::models::{Administrator, AdministratorRecord, Employee};

#[derive(Default)]
pub struct MemoryAdministratorRepository {
    rows: Mutex<Vec<Administrator>>,
    inserts: AtomicUsize,
    conflict_on_insert: bool,
}

impl MemoryAdministratorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails with a unique violation, as if a concurrent
    /// registration won the race after the lookup.
    pub fn with_conflict_on_insert() -> Self {
        Self {
            conflict_on_insert: true,
            ..Self::default()
        }
    }

    /// Number of times `insert` was called, successful or not.
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub async fn all(&self) -> Vec<Administrator> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl AdministratorRepository for MemoryAdministratorRepository {
    async fn find_by_mail_address(
        &self,
        mail_address: &MailAddress,
    ) -> Result<Option<Administrator>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|a| &a.mail_address == mail_address).cloned())
    }

    async fn insert(&self, record: &AdministratorRecord) -> Result<Administrator, RepositoryError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().await;
        if self.conflict_on_insert || rows.iter().any(|a| a.mail_address == record.mail_address) {
            return Err(RepositoryError::Conflict(
                "mail address already exists".to_owned(),
            ));
        }

        let next_id = i32::try_from(rows.len() + 1)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        let admin = Administrator {
            id: AdministratorId::new(next_id),
            name: record.name.clone(),
            mail_address: record.mail_address.clone(),
            password_hash: record.password_hash.clone(),
            created_at: Utc::now(),
        };
        rows.push(admin.clone());
        Ok(admin)
    }
}

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    rows: Vec<Employee>,
}

impl MemoryEmployeeRepository {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.hire_date.cmp(&a.hire_date).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}
