//! Department domain model.

use serde::{Deserialize, Serialize};

/// Department names employees may be assigned to.
///
/// Other departments can exist in the collection, but assignment rejects
/// them at write time.
pub const ASSIGNABLE_DEPARTMENT_NAMES: [&str; 2] = ["Engineering", "HR"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Operator-assigned unique id.
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Department {
    /// Whether employees may be assigned to this department.
    pub fn is_assignable(&self) -> bool {
        ASSIGNABLE_DEPARTMENT_NAMES.contains(&self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Department;

    #[test]
    fn only_engineering_and_hr_are_assignable() {
        let mut dept = Department {
            id: 7,
            name: "Engineering".to_string(),
            description: String::new(),
        };
        assert!(dept.is_assignable());

        dept.name = "HR".to_string();
        assert!(dept.is_assignable());

        dept.name = "Finance".to_string();
        assert!(!dept.is_assignable());
    }
}
