//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, session and slot wiring into the API that
//!   view controllers consume.
//! - Keep UI layers decoupled from storage details.

pub mod portal;

pub use portal::PortalService;
