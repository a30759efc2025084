//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and listing surfaces while reading shared
//! state (language, auth, config) from Leptos context providers.

pub mod admin_layout;
pub mod artwork_card;
pub mod confirm_dialog;
pub mod file_field;
pub mod filter_chips;
pub mod filter_select;
pub mod form_field;
pub mod header;
pub mod layout;
pub mod load_error;
pub mod museum_map;
pub mod notice;
pub mod protected_route;
pub mod room_card;
