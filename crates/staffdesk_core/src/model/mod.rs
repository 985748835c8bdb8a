//! Domain records for the employee portal.
//!
//! # Responsibility
//! - Define the canonical data structures persisted in the portal database.
//! - Keep serialized field names identical to the stored JSON layout.
//!
//! # Invariants
//! - `Account::email` is the unique key of an account (case-sensitive).
//! - `Department::id` and `Employee::id` are unique within their collections.

pub mod account;
pub mod department;
pub mod employee;
pub mod portal;
pub mod request;
