//! Persistent store for the portal database.
//!
//! # Responsibility
//! - Load, seed and save the portal database as one JSON document in a
//!   named slot.
//! - Keep the canonical admin account present in every loaded database.
//!
//! # Invariants
//! - `load` never masks corruption: an unparseable document is an error,
//!   an absent one is `Ok(None)`, and the caller picks the policy.
//! - After `load_or_seed`, exactly one account holds the reserved admin
//!   email and it carries the canonical admin fields.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};

use crate::db::DbError;
use crate::model::account::{Account, Role};
use crate::model::department::Department;
use crate::model::portal::PortalDb;

pub mod slots;

pub use slots::{SlotStore, AUTH_TOKEN_SLOT, PENDING_EMAIL_SLOT, PORTAL_DB_SLOT};

/// Reserved admin identity, restored on every load.
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Password123!";
const ADMIN_FIRST_NAME: &str = "Admin";
const ADMIN_LAST_NAME: &str = "Admin";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The persisted document exists but does not parse as a portal database.
    Corrupt(serde_json::Error),
    /// The in-memory database could not be serialized (should not happen).
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt(err) => write!(f, "persisted portal data is corrupt: {err}"),
            Self::Encode(err) => write!(f, "portal data could not be serialized: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// The database a fresh install starts from: the admin account and the two
/// departments employees may be assigned to.
pub fn seeded() -> PortalDb {
    PortalDb {
        accounts: vec![canonical_admin()],
        departments: vec![
            Department {
                id: 1,
                name: "Engineering".to_string(),
                description: "Software development team".to_string(),
            },
            Department {
                id: 2,
                name: "HR".to_string(),
                description: "Human resources team".to_string(),
            },
        ],
        employees: Vec::new(),
        requests: Vec::new(),
    }
}

fn canonical_admin() -> Account {
    Account {
        first_name: ADMIN_FIRST_NAME.to_string(),
        last_name: ADMIN_LAST_NAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
        role: Role::Admin,
        verified: true,
    }
}

/// Restores the canonical admin account: overwrites whatever sits at the
/// reserved email, or inserts the account first when it is missing.
/// Idempotent.
pub fn ensure_admin_account(db: &mut PortalDb) {
    match db.accounts.iter().position(|a| a.email == ADMIN_EMAIL) {
        Some(index) => db.accounts[index] = canonical_admin(),
        None => db.accounts.insert(0, canonical_admin()),
    }
}

/// Reads the portal database slot.
///
/// Returns `Ok(None)` when nothing has been persisted yet and
/// `StoreError::Corrupt` when a document exists but does not parse, so the
/// caller can distinguish a fresh install from damaged data.
pub fn load(slots: &SlotStore<'_>) -> StoreResult<Option<PortalDb>> {
    let Some(raw) = slots.get(PORTAL_DB_SLOT)? else {
        return Ok(None);
    };
    let db = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
    Ok(Some(db))
}

/// Serializes the whole database and replaces the slot content.
pub fn save(slots: &SlotStore<'_>, db: &PortalDb) -> StoreResult<()> {
    let raw = serde_json::to_string(db).map_err(StoreError::Encode)?;
    slots.set(PORTAL_DB_SLOT, &raw)?;
    Ok(())
}

/// Loads the portal database with the demo policy applied: seed when empty,
/// reseed (with a logged warning) when corrupt, and re-assert the canonical
/// admin account over pre-existing data.
pub fn load_or_seed(slots: &SlotStore<'_>) -> StoreResult<PortalDb> {
    let db = match load(slots) {
        Ok(Some(mut db)) => {
            ensure_admin_account(&mut db);
            db
        }
        Ok(None) => {
            info!("event=store_seed module=store status=ok reason=empty");
            seeded()
        }
        Err(StoreError::Corrupt(err)) => {
            warn!("event=store_reseed module=store status=recovered error={err}");
            seeded()
        }
        Err(err) => return Err(err),
    };
    save(slots, &db)?;
    Ok(db)
}
