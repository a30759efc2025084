//! Admin route guard and post-login navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and the login page share these rules so the redirect to
//! login and the redirect back always agree on what a safe target is.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/admin/login";
pub const DEFAULT_ADMIN_PATH: &str = "/admin/dashboard";

/// What a protected route should render for the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still validating; show a neutral indicator.
    Loading,
    /// Replace the current entry with this path.
    Redirect(String),
    Render,
}

/// Decide how to treat a request for the protected `path`.
pub fn guard_decision(state: &AuthState, path: &str) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_admin() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(login_redirect(path))
    }
}

/// Login URL that remembers `path` when it is safe to return to.
pub fn login_redirect(path: &str) -> String {
    if is_safe_admin_path(path) {
        format!("{LOGIN_PATH}?from={path}")
    } else {
        LOGIN_PATH.to_owned()
    }
}

/// Where to go after a successful login.
pub fn return_target(from: Option<&str>) -> String {
    from.filter(|path| is_safe_admin_path(path))
        .unwrap_or(DEFAULT_ADMIN_PATH)
        .to_owned()
}

/// An in-app admin path other than the login page, made only of
/// `[A-Za-z0-9/_-]`.
pub fn is_safe_admin_path(path: &str) -> bool {
    path.starts_with("/admin")
        && !path.starts_with("//")
        && path.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-'))
        && path.trim_end_matches('/') != LOGIN_PATH
}

/// Leave the login page once an admin session exists.
pub fn install_login_redirect<F>(auth: RwSignal<AuthState>, from: Signal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_admin() {
            let target = return_target(from.get().as_deref());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
