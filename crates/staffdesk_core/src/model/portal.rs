//! The portal database: one composite record holding every collection.
//!
//! The whole value is serialized to a single JSON document and written to
//! one storage slot on every mutation; there is no partial persistence.

use serde::{Deserialize, Serialize};

use crate::model::account::Account;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::request::Request;

/// Everything the portal persists, loaded and saved as one unit.
///
/// Each collection defaults to empty so documents written by older builds
/// (or hand-edited ones missing a list) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalDb {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

#[cfg(test)]
mod tests {
    use super::PortalDb;

    #[test]
    fn missing_collections_default_to_empty() {
        let db: PortalDb = serde_json::from_str(r#"{"accounts":[]}"#).unwrap();
        assert!(db.departments.is_empty());
        assert!(db.employees.is_empty());
        assert!(db.requests.is_empty());
    }
}
