//! Runtime configuration seen by the browser client.
//!
//! The SSR host renders the values into `<meta>` tags (see `app::shell`);
//! after hydration the client reads them back, falling back to values baked
//! in at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const API_BASE_URL_META: &str = "museum-api-base-url";
pub const FRONTEND_URL_META: &str = "museum-frontend-url";

/// Backend location and optional public site URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    frontend_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, None)
    }
}

impl ClientConfig {
    /// Trailing slashes are dropped; an empty base falls back to the default
    /// and an empty frontend URL counts as unset.
    pub fn new(api_base_url: &str, frontend_url: Option<&str>) -> Self {
        let api_base_url = match api_base_url.trim().trim_end_matches('/') {
            "" => DEFAULT_API_BASE_URL.to_owned(),
            base => base.to_owned(),
        };
        let frontend_url = frontend_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        Self { api_base_url, frontend_url }
    }

    /// Values from `MUSEUM_API_BASE_URL` / `MUSEUM_FRONTEND_URL` at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("MUSEUM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("MUSEUM_FRONTEND_URL"),
        )
    }

    /// Values from the shell's `<meta>` tags, falling back to the build env.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let fallback = Self::from_build_env();
            let read = |name: &str| -> Option<String> {
                web_sys::window()?
                    .document()?
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()?
                    .get_attribute("content")
            };
            let api_base_url = read(API_BASE_URL_META).unwrap_or_else(|| fallback.api_base_url.clone());
            let frontend_url = read(FRONTEND_URL_META).or(fallback.frontend_url);
            Self::new(&api_base_url, frontend_url.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_build_env()
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn frontend_url(&self) -> Option<&str> {
        self.frontend_url.as_deref()
    }

    /// Resolve a backend media path (`/uploads/...`) to a full URL. Absolute
    /// URLs pass through unchanged.
    pub fn media_url(&self, path: &str) -> String {
        if is_absolute(path) {
            path.to_owned()
        } else {
            format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
        }
    }

    /// Shareable link for an in-app path. Without a configured frontend URL
    /// the path is returned as-is.
    pub fn public_url(&self, path: &str) -> String {
        match &self.frontend_url {
            Some(base) => format!("{base}/{}", path.trim_start_matches('/')),
            None => path.to_owned(),
        }
    }
}

fn is_absolute(path: &str) -> bool {
    ["http://", "https://", "data:", "blob:"].iter().any(|scheme| path.starts_with(scheme))
}
