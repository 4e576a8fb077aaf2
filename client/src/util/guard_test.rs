use super::*;
use gateway::session::{parse_admin_login, parse_user_login};
use serde_json::json;

fn with_user() -> SessionState {
    let user = parse_user_login(&json!({ "id": 1, "token": "t" })).expect("user");
    SessionState { user: Some(user), admin: None, loaded: true, signed_out: None }
}

#[test]
fn nothing_happens_before_sessions_load() {
    let state = SessionState::default();
    assert_eq!(protected_redirect(Role::User, &state), None);
    assert_eq!(signed_in_redirect(Role::User, &state), None);
}

#[test]
fn missing_user_goes_to_login() {
    let state = SessionState { loaded: true, ..SessionState::default() };
    assert_eq!(protected_redirect(Role::User, &state), Some("/login"));
    assert_eq!(protected_redirect(Role::Admin, &state), Some("/admin/login"));
}

#[test]
fn user_session_does_not_unlock_admin_pages() {
    let state = with_user();
    assert_eq!(protected_redirect(Role::User, &state), None);
    assert_eq!(protected_redirect(Role::Admin, &state), Some("/admin/login"));
}

#[test]
fn signed_in_visitors_skip_login() {
    let mut state = with_user();
    assert_eq!(signed_in_redirect(Role::User, &state), Some("/dashboard"));
    assert_eq!(signed_in_redirect(Role::Admin, &state), None);

    state.admin = Some(parse_admin_login(&json!({ "id": 2, "token": "a" })).expect("admin"));
    assert_eq!(signed_in_redirect(Role::Admin, &state), Some("/admin/dashboard"));
}

#[test]
fn logout_does_not_trigger_login_redirect() {
    let mut state = with_user();
    state.sign_out(Role::User);
    assert_eq!(protected_redirect(Role::User, &state), None);
    // Other roles keep guarding.
    assert_eq!(protected_redirect(Role::Admin, &state), Some("/admin/login"));
}

#[test]
fn signing_back_in_restores_the_guard() {
    let mut state = with_user();
    state.sign_out(Role::User);
    let user = parse_user_login(&json!({ "id": 3, "token": "t3" })).expect("user");
    state.sign_in_user(user);
    assert_eq!(protected_redirect(Role::User, &state), None);

    state.user = None;
    assert_eq!(protected_redirect(Role::User, &state), Some("/login"));
}
