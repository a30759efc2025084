//! Load state for data a page fetches from the backend.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::error::ApiError;

/// Outcome of an in-flight or finished load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    /// Human-readable reason; pages pair it with a retry prompt.
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>, describe: impl FnOnce(&ApiError) -> String) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                log::warn!("load failed: {e}");
                Self::Failed(describe(&e))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Self::Loading => Remote::Loading,
            Self::Ready(value) => Remote::Ready(f(value)),
            Self::Failed(message) => Remote::Failed(message),
        }
    }
}
