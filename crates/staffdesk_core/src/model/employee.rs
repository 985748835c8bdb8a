//! Employee domain model.
//!
//! Both references held by an employee are weak: the account email and the
//! department id are checked when the employee is written, but deleting the
//! referenced account or department leaves the employee in place and the
//! reference resolves to nothing from then on.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Externally supplied identifier (badge number, HR code, ...).
    pub id: String,
    /// References `Account::email` at assignment time.
    pub email: String,
    pub position: String,
    /// References `Department::id` at assignment time.
    pub department_id: i64,
    #[serde(default)]
    pub hire_date: Option<String>,
}
