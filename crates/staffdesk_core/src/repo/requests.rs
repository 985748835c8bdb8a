//! Request operations: submission and per-identity listing.
//!
//! Requests are append-only in core: nothing deletes them and nothing moves
//! them out of `Pending`.

use chrono::Local;

use crate::model::request::{normalize_items, Request, RequestItemInput, RequestStatus};
use crate::repo::{RepoError, RepoResult, Repository};

impl Repository<'_> {
    /// Files a request for the given account email, stamped with the local
    /// calendar day. Item rows with blank names are dropped; quantities
    /// below 1 become 1.
    pub fn submit_request(
        &mut self,
        employee_email: &str,
        kind: &str,
        items: &[RequestItemInput],
    ) -> RepoResult<Request> {
        if kind.is_empty() {
            return Err(RepoError::Validation("request type is required".to_string()));
        }
        let items = normalize_items(items);
        if items.is_empty() {
            return Err(RepoError::Validation(
                "at least one named item is required".to_string(),
            ));
        }

        let request = Request {
            kind: kind.to_string(),
            items,
            status: RequestStatus::Pending,
            date: Local::now().format("%Y-%m-%d").to_string(),
            employee_email: employee_email.to_string(),
        };
        self.db.requests.push(request.clone());
        self.flush()?;
        Ok(request)
    }

    /// Requests submitted by the given account email, in submission order.
    pub fn requests_for(&self, employee_email: &str) -> Vec<Request> {
        self.db
            .requests
            .iter()
            .filter(|r| r.employee_email == employee_email)
            .cloned()
            .collect()
    }
}
