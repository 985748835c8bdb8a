//! Department operations.
//!
//! Records are addressed by their operator-assigned id, never by list
//! position, so a re-sorted listing cannot redirect an edit.

use crate::model::department::Department;
use crate::repo::{RepoError, RepoResult, Repository};

impl Repository<'_> {
    /// All departments, in stored order.
    pub fn departments(&self) -> &[Department] {
        &self.db.departments
    }

    pub fn find_department(&self, id: i64) -> Option<&Department> {
        self.db.departments.iter().find(|d| d.id == id)
    }

    pub fn create_department(
        &mut self,
        id: i64,
        name: &str,
        description: &str,
    ) -> RepoResult<()> {
        if name.is_empty() {
            return Err(RepoError::Validation(
                "department name is required".to_string(),
            ));
        }
        if self.find_department(id).is_some() {
            return Err(RepoError::Conflict(format!(
                "department id already exists: {id}"
            )));
        }

        self.db.departments.push(Department {
            id,
            name: name.to_string(),
            description: description.to_string(),
        });
        self.flush()
    }

    pub fn update_department(
        &mut self,
        id: i64,
        name: &str,
        description: &str,
    ) -> RepoResult<()> {
        if name.is_empty() {
            return Err(RepoError::Validation(
                "department name is required".to_string(),
            ));
        }
        let Some(department) = self.db.departments.iter_mut().find(|d| d.id == id) else {
            return Err(RepoError::NotFound(format!("department not found: {id}")));
        };
        department.name = name.to_string();
        department.description = description.to_string();
        self.flush()
    }

    /// Removes the department. Employees referencing it are left in place;
    /// their department reference simply stops resolving.
    pub fn delete_department(&mut self, id: i64) -> RepoResult<()> {
        let Some(index) = self.db.departments.iter().position(|d| d.id == id) else {
            return Err(RepoError::NotFound(format!("department not found: {id}")));
        };
        self.db.departments.remove(index);
        self.flush()
    }
}
