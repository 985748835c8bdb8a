//! Employee request domain model.
//!
//! # Invariants
//! - A stored request has at least one item, every item name is non-blank
//!   and every quantity is >= 1.
//! - `status` starts as `Pending`; no operation in core transitions it.

use serde::{Deserialize, Serialize};

/// Approval state of a request. Transitions are left to a future back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RequestStatus::Pending => f.write_str("Pending"),
            RequestStatus::Approved => f.write_str("Approved"),
            RequestStatus::Rejected => f.write_str("Rejected"),
        }
    }
}

/// One requested line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub qty: u32,
}

/// Raw item input as collected by a form row, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestItemInput {
    pub name: String,
    /// Anything below 1 (including unparsed input mapped to 0) becomes 1.
    pub qty: i64,
}

impl RequestItemInput {
    pub fn new(name: impl Into<String>, qty: i64) -> Self {
        Self {
            name: name.into(),
            qty,
        }
    }
}

/// Normalizes raw item rows: trims names, drops blank rows, clamps
/// quantities up to the minimum of 1.
pub fn normalize_items(inputs: &[RequestItemInput]) -> Vec<RequestItem> {
    inputs
        .iter()
        .filter_map(|input| {
            let name = input.name.trim();
            if name.is_empty() {
                return None;
            }
            let qty = if input.qty >= 1 { input.qty as u32 } else { 1 };
            Some(RequestItem {
                name: name.to_string(),
                qty,
            })
        })
        .collect()
}

/// Submitted employee request (equipment, supplies, leave, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Serialized as `type` to match the stored layout.
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<RequestItem>,
    pub status: RequestStatus,
    /// ISO calendar date (`YYYY-MM-DD`) of submission, local clock.
    pub date: String,
    /// Email of the submitting account.
    pub employee_email: String,
}

#[cfg(test)]
mod tests {
    use super::{normalize_items, RequestItemInput, RequestStatus};

    #[test]
    fn normalize_drops_blank_names_and_clamps_quantities() {
        let items = normalize_items(&[
            RequestItemInput::new("  Pen ", 0),
            RequestItemInput::new("   ", 5),
            RequestItemInput::new("Notebook", -3),
            RequestItemInput::new("Stapler", 2),
        ]);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Pen");
        assert_eq!(items[0].qty, 1);
        assert_eq!(items[1].name, "Notebook");
        assert_eq!(items[1].qty, 1);
        assert_eq!(items[2].qty, 2);
    }

    #[test]
    fn status_serializes_as_capitalized_word() {
        let json = serde_json::to_string(&RequestStatus::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");
    }
}
