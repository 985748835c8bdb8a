//! Core domain logic for the staffdesk employee portal.
//! This crate is the single source of truth for business invariants:
//! accounts and their verification lifecycle, role-gated view access, and
//! the department/employee/request collections persisted as one document
//! in a local slot store.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, Role};
pub use model::department::{Department, ASSIGNABLE_DEPARTMENT_NAMES};
pub use model::employee::Employee;
pub use model::portal::PortalDb;
pub use model::request::{Request, RequestItem, RequestItemInput, RequestStatus};
pub use repo::{RepoError, RepoResult, Repository};
pub use service::PortalService;
pub use session::{resolve_view, Session, View};
pub use store::{SlotStore, StoreError, ADMIN_EMAIL, ADMIN_PASSWORD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
