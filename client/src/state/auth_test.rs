use super::*;

fn user(role: &str) -> User {
    User { id: 1, username: "curator".to_owned(), email: None, role: role.to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn initializing_state_is_loading_and_empty() {
    let state = AuthState::initializing();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn admin_user_is_admin() {
    let state = AuthState { token: Some("t".to_owned()), user: Some(user("admin")), loading: false };
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert_eq!(state.username(), Some("curator"));
}

#[test]
fn editor_user_is_authenticated_but_not_admin() {
    let state = AuthState { token: Some("t".to_owned()), user: Some(user("editor")), loading: false };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}
