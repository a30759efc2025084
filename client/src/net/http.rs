//! HTTP transport seam between the API helpers and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! API helpers describe a call as an [`ApiRequest`] and hand it to an
//! [`HttpClient`]. In the browser (`hydrate`) that is [`BrowserClient`] over
//! `gloo-net`; during SSR the same type is inert because the REST API is only
//! ever called from the browser. Tests script their own client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::CONNECTION_ERROR_MESSAGE;

/// HTTP verbs used by the museum API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file picked by the user for upload.
///
/// In the browser this wraps the `File` handle from the input element; the
/// bytes are never read on the client side.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl FileUpload {
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Original file name, sent as the multipart filename.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One multipart form field.
#[derive(Clone, Debug, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: FileUpload },
}

impl FormField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::Text { name: name.to_owned(), value: value.into() }
    }

    pub fn file(name: &str, file: FileUpload) -> Self {
        Self::File { name: name.to_owned(), file }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Request payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormField>),
}

/// A transport-agnostic description of one API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/api/rooms`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Bearer token; set by the session, never by page code.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), bearer: None, body: RequestBody::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    #[must_use]
    pub fn multipart(mut self, fields: Vec<FormField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Absolute URL without the query string.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] carrying the server message.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.body))
        }
    }

    /// Decode a 2xx JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for non-2xx statuses and
    /// [`ApiError::Parse`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::from_status(self.status, &self.body));
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Something that can execute an [`ApiRequest`].
///
/// Implementations resolve to `Err` only when no response was obtained;
/// any HTTP status, including 4xx/5xx, is an `Ok(ApiResponse)`.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `gloo-net` backed client rooted at the configured API base URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserClient {
    base_url: String,
}

impl BrowserClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpClient for BrowserClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = request.url(&self.base_url);
            log::debug!("{} {}", request.method.as_str(), url);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let outgoing = match &request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(value),
                RequestBody::Multipart(fields) => builder.body(form_data(fields)?),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = outgoing.send().await.map_err(|e| {
                log::warn!("{} {url} failed: {e}", request.method.as_str());
                ApiError::Network(CONNECTION_ERROR_MESSAGE.to_owned())
            })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn form_data(fields: &[FormField]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    for field in fields {
        let appended = match field {
            FormField::Text { name, value } => form.append_with_str(name, value),
            FormField::File { name, file } => form.append_with_blob_and_filename(name, &file.file, file.name()),
        };
        appended.map_err(|_| ApiError::Network(format!("could not attach form field {}", field.name())))?;
    }
    Ok(form)
}
