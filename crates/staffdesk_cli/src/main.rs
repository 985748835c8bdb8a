//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;

use staffdesk_core::db::open_db_in_memory;
use staffdesk_core::{core_version, PortalService};

fn main() -> Result<(), Box<dyn Error>> {
    println!("staffdesk_core version={}", core_version());

    let conn = open_db_in_memory()?;
    let portal = PortalService::open(&conn)?;
    println!(
        "seeded accounts={} departments={} admin={}",
        portal.accounts().len(),
        portal.departments().len(),
        portal.accounts()[0].full_name()
    );
    println!("signed_in={}", portal.session().is_authenticated());
    Ok(())
}
