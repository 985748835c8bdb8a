//! Named persistence slots over the `slots` table.
//!
//! # Responsibility
//! - Provide get/set/remove of string values by fixed key.
//! - Keep SQL details inside the core persistence boundary.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Slot holding the whole portal database as one JSON document.
pub const PORTAL_DB_SLOT: &str = "portal_db_v1";
/// Slot holding the session token (the signed-in account's email).
pub const AUTH_TOKEN_SLOT: &str = "auth_token";
/// Slot holding the email awaiting verification, if any.
pub const PENDING_EMAIL_SLOT: &str = "unverified_email";

/// Key/value access to the persistence slots of one connection.
pub struct SlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SlotStore<'conn> {
    /// Wraps a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
