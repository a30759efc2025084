use super::*;
use crate::net::types::User;

fn state(role: Option<&str>, loading: bool) -> AuthState {
    AuthState {
        token: role.map(|_| "jwt".to_owned()),
        user: role.map(|role| User { id: 1, username: "curator".to_owned(), email: None, role: role.to_owned() }),
        loading,
    }
}

#[test]
fn loading_session_shows_indicator() {
    assert_eq!(guard_decision(&state(None, true), "/admin/rooms"), GuardDecision::Loading);
    assert_eq!(guard_decision(&state(Some("admin"), true), "/admin/rooms"), GuardDecision::Loading);
}

#[test]
fn admin_renders_protected_subtree() {
    assert_eq!(guard_decision(&state(Some("admin"), false), "/admin/rooms"), GuardDecision::Render);
}

#[test]
fn anonymous_user_is_sent_to_login_with_origin() {
    assert_eq!(
        guard_decision(&state(None, false), "/admin/dashboard"),
        GuardDecision::Redirect("/admin/login?from=/admin/dashboard".to_owned())
    );
}

#[test]
fn non_admin_user_is_sent_to_login() {
    assert_eq!(
        guard_decision(&state(Some("editor"), false), "/admin/artworks"),
        GuardDecision::Redirect("/admin/login?from=/admin/artworks".to_owned())
    );
}

#[test]
fn unsafe_origin_is_dropped() {
    assert_eq!(login_redirect("/admin/x?y=1"), LOGIN_PATH);
    assert_eq!(login_redirect("/rooms"), LOGIN_PATH);
}

#[test]
fn return_target_after_dashboard_redirect_is_dashboard() {
    assert_eq!(return_target(Some("/admin/dashboard")), "/admin/dashboard");
}

#[test]
fn return_target_defaults_when_missing_or_unsafe() {
    assert_eq!(return_target(None), DEFAULT_ADMIN_PATH);
    assert_eq!(return_target(Some("https://evil.example")), DEFAULT_ADMIN_PATH);
    assert_eq!(return_target(Some("//evil.example/admin")), DEFAULT_ADMIN_PATH);
    assert_eq!(return_target(Some("/admin/login")), DEFAULT_ADMIN_PATH);
    assert_eq!(return_target(Some("/admin/login/")), DEFAULT_ADMIN_PATH);
    assert_eq!(return_target(Some("/artworks")), DEFAULT_ADMIN_PATH);
}

#[test]
fn safe_admin_paths() {
    assert!(is_safe_admin_path("/admin"));
    assert!(is_safe_admin_path("/admin/rooms"));
    assert!(is_safe_admin_path("/admin/artworks_2-b"));
    assert!(!is_safe_admin_path("/admin/rooms?x=1"));
    assert!(!is_safe_admin_path("/admin/é"));
}
