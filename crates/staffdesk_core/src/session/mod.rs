//! Session state: who, if anyone, is signed in.
//!
//! The session is an explicit value owned by the caller (in practice by
//! [`crate::service::PortalService`]) and passed by reference wherever the
//! current identity matters; there is no process-wide current user.

use crate::model::account::Account;

pub mod views;

pub use views::{resolve_view, View};

/// Authentication state of one portal instance.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Account),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Authenticated(account) if account.is_admin())
    }

    /// The signed-in account, if any.
    pub fn identity(&self) -> Option<&Account> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(account) => Some(account),
        }
    }
}
