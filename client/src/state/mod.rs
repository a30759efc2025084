//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `listing`, `remote`) so
//! pages and components depend on small focused models.

pub mod auth;
pub mod listing;
pub mod remote;
pub mod session;
