//! Domain repository: CRUD and invariants over the portal database.
//!
//! # Responsibility
//! - Own the loaded portal database and every operation that touches it.
//! - Re-persist the whole database after each successful mutation.
//!
//! # Invariants
//! - Validation and conflict checks run before any in-memory change, so a
//!   failed operation leaves no partial mutation behind.
//! - Every mutating operation ends with a full flush of the database slot.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rusqlite::Connection;

use crate::db::DbError;
use crate::model::portal::PortalDb;
use crate::store::{self, SlotStore, StoreError};

mod accounts;
mod departments;
mod employees;
mod requests;

pub type RepoResult<T> = Result<T, RepoError>;

/// Domain repository error.
#[derive(Debug)]
pub enum RepoError {
    /// A field is missing, too short or otherwise malformed.
    Validation(String),
    /// A unique key is already taken.
    Conflict(String),
    /// A reference does not resolve (account email, assignable department).
    Reference(String),
    /// The operation target no longer exists.
    NotFound(String),
    /// The persistence layer failed; not retried.
    Storage(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message)
            | Self::Conflict(message)
            | Self::Reference(message)
            | Self::NotFound(message) => f.write_str(message),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Storage(StoreError::Db(value))
    }
}

/// The loaded portal database plus its persistence slot.
///
/// All reads hand out references into the in-memory state; all writes go
/// through operations defined in the per-entity modules, which validate,
/// mutate and then re-persist the whole database.
pub struct Repository<'conn> {
    slots: SlotStore<'conn>,
    db: PortalDb,
}

impl<'conn> Repository<'conn> {
    /// Loads (or seeds) the portal database from a migrated connection.
    pub fn open(conn: &'conn Connection) -> RepoResult<Self> {
        let slots = SlotStore::new(conn);
        let db = store::load_or_seed(&slots)?;
        Ok(Self { slots, db })
    }

    fn flush(&self) -> RepoResult<()> {
        store::save(&self.slots, &self.db)?;
        Ok(())
    }
}
