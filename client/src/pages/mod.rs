//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates rendering details to
//! `components`. Public pages fetch through the shared transport; admin pages
//! go through the session so auth failures end it.

pub mod about;
pub mod admin_artworks;
pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_rooms;
pub mod artwork_detail;
pub mod artworks;
pub mod home;
pub mod room_detail;
pub mod rooms;
pub mod search;
