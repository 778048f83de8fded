//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{
    AdministratorRepository, EmployeeRepository, PgAdministratorRepository, PgEmployeeRepository,
};
use crate::services::AdministratorService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Repositories are held as trait objects so
/// tests can swap in in-memory stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    administrators: Arc<dyn AdministratorRepository>,
    employees: Arc<dyn EmployeeRepository>,
    administrator_service: AdministratorService,
}

impl AppState {
    /// Create state backed by `PostgreSQL`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgAdministratorRepository::new(pool.clone())),
            Arc::new(PgEmployeeRepository::new(pool)),
        )
    }

    /// Create state over arbitrary repositories.
    #[must_use]
    pub fn with_repositories(
        administrators: Arc<dyn AdministratorRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        let administrator_service = AdministratorService::new(Arc::clone(&administrators));

        Self {
            inner: Arc::new(AppStateInner {
                administrators,
                employees,
                administrator_service,
            }),
        }
    }

    /// Administrator lookups for the registration uniqueness check.
    #[must_use]
    pub fn administrators(&self) -> &dyn AdministratorRepository {
        self.inner.administrators.as_ref()
    }

    #[must_use]
    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.inner.employees.as_ref()
    }

    #[must_use]
    pub fn administrator_service(&self) -> &AdministratorService {
        &self.inner.administrator_service
    }
}
