//! Employee operations.
//!
//! # Invariants
//! - A written employee always references an existing account email and a
//!   department named Engineering or HR at the moment of the write.
//! - The references are weak afterwards: deleting the account or the
//!   department leaves the employee behind with a reference that resolves
//!   to nothing (see [`Repository::assignable_department_name`]).

use crate::model::employee::Employee;
use crate::repo::{RepoError, RepoResult, Repository};

impl Repository<'_> {
    /// All employees, in stored order.
    pub fn employees(&self) -> &[Employee] {
        &self.db.employees
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.db.employees.iter().find(|e| e.id == id)
    }

    /// Resolves the employee's department name, weakly: `None` when the id
    /// dangles or the department is not one employees may belong to.
    pub fn assignable_department_name(&self, employee: &Employee) -> Option<&str> {
        self.find_department(employee.department_id)
            .filter(|d| d.is_assignable())
            .map(|d| d.name.as_str())
    }

    pub fn create_employee(
        &mut self,
        id: &str,
        email: &str,
        position: &str,
        department_id: i64,
        hire_date: Option<&str>,
    ) -> RepoResult<()> {
        self.check_employee_fields(id, email, position, department_id)?;
        if self.find_employee(id).is_some() {
            return Err(RepoError::Conflict(format!(
                "employee id already exists: {id}"
            )));
        }

        self.db.employees.push(Employee {
            id: id.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            department_id,
            hire_date: hire_date.map(str::to_string),
        });
        self.flush()
    }

    /// Edits the employee currently stored under `original_id`; the id
    /// itself may change as part of the edit.
    pub fn update_employee(
        &mut self,
        original_id: &str,
        id: &str,
        email: &str,
        position: &str,
        department_id: i64,
        hire_date: Option<&str>,
    ) -> RepoResult<()> {
        let Some(index) = self.db.employees.iter().position(|e| e.id == original_id) else {
            return Err(RepoError::NotFound(format!(
                "employee not found: {original_id}"
            )));
        };
        self.check_employee_fields(id, email, position, department_id)?;
        if self
            .db
            .employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.id == id)
        {
            return Err(RepoError::Conflict(format!(
                "employee id already exists: {id}"
            )));
        }

        let employee = &mut self.db.employees[index];
        employee.id = id.to_string();
        employee.email = email.to_string();
        employee.position = position.to_string();
        employee.department_id = department_id;
        employee.hire_date = hire_date.map(str::to_string);
        self.flush()
    }

    pub fn delete_employee(&mut self, id: &str) -> RepoResult<()> {
        let Some(index) = self.db.employees.iter().position(|e| e.id == id) else {
            return Err(RepoError::NotFound(format!("employee not found: {id}")));
        };
        self.db.employees.remove(index);
        self.flush()
    }

    fn check_employee_fields(
        &self,
        id: &str,
        email: &str,
        position: &str,
        department_id: i64,
    ) -> RepoResult<()> {
        if id.is_empty() || email.is_empty() || position.is_empty() {
            return Err(RepoError::Validation(
                "employee id, email and position are required".to_string(),
            ));
        }
        let assignable = self
            .find_department(department_id)
            .is_some_and(|d| d.is_assignable());
        if !assignable {
            return Err(RepoError::Reference(
                "department must be Engineering or HR".to_string(),
            ));
        }
        if self.find_account(email).is_none() {
            return Err(RepoError::Reference(
                "email must match an existing account".to_string(),
            ));
        }
        Ok(())
    }
}
