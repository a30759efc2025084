//! Error taxonomy for calls against the museum API.
//!
//! ERROR HANDLING
//! ==============
//! Every API helper resolves to `Result<T, ApiError>`; nothing panics across
//! the network boundary. `ApiError::kind` is what pages branch on: auth
//! failures end the session, everything else is shown inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message used when the backend rejects a login without explaining why.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
/// Message used when a request never produced a response.
pub const CONNECTION_ERROR_MESSAGE: &str = "Unable to reach the server";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no stored token.
    #[error("no authentication token")]
    MissingCredential,
    /// The backend rejected the bearer token (401) or the role (403).
    #[error("authentication expired")]
    AuthExpired,
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Validation { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),
}

/// Coarse classification used by callers to pick a handling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Validation,
    Network,
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential | Self::AuthExpired => ErrorKind::Auth,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }

    /// Build a validation error from a non-2xx response, preferring the
    /// message the backend put in the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| status_failed_message(status));
        Self::Validation { status, message }
    }
}

/// Whether a status on an authenticated call means the session is no longer valid.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

/// Extract the human-readable message from an error body.
///
/// The backend is inconsistent about the key: Flask-JWT uses `msg`, the
/// controllers use `error`, a few handlers use `message`.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_owned)
}

fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
