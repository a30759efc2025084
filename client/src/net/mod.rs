//! Networking modules for the museum REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` covers the public endpoints, `admin`
//! the authenticated back-office, `types` the wire schema and `error` the
//! failure taxonomy shared by all of them.

pub mod admin;
pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
