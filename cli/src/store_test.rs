use gateway::session::parse_user_login;
use gateway::{Role, Session};
use serde_json::json;

use super::*;

fn user_session() -> Session {
    Session::User(parse_user_login(&json!({ "id": 7, "email": "ada@example.com", "token": "t1" })).expect("user"))
}

#[test]
fn save_creates_directory_and_role_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(tmp.path().join("nested"));

    store.save(&user_session()).expect("save");

    assert!(tmp.path().join("nested").join("user.json").exists());
    assert_eq!(store.token(Role::User).as_deref(), Some("t1"));
    assert_eq!(store.user().map(|u| u.id).as_deref(), Some("7"));
}

#[test]
fn roles_use_separate_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(tmp.path());
    store.save(&user_session()).expect("save");

    assert!(store.admin().is_none());
    store.clear(Role::Admin);
    assert!(store.user().is_some());
}

#[test]
fn clear_removes_the_slot() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(tmp.path());
    store.save(&user_session()).expect("save");

    store.clear(Role::User);

    assert!(!tmp.path().join("user.json").exists());
    assert!(store.user().is_none());
}

#[test]
fn removing_a_missing_slot_is_quiet() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(tmp.path());
    store.remove("admin");
    assert!(store.read("admin").is_none());
}

#[test]
fn unwritable_directory_is_a_storage_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, "x").expect("write");
    let store = FileSessionStore::new(blocker.join("sessions"));

    let err = store.save(&user_session()).unwrap_err();

    assert!(matches!(err, GatewayError::Storage(_)));
}
