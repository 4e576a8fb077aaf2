use serde_json::json;

use super::*;
use crate::request::{Body, Method};
use crate::test_support::gateway;
use crate::types::{DocumentSortColumn, Sort, SortOrder, StatusFilter, UserSortColumn};

fn signed_in_user(gw: &crate::test_support::TestGateway) -> UserSession {
    let user = parse_user_login(&json!({
        "id": 7,
        "email": "ada@example.com",
        "fullName": "Ada Lovelace",
        "token": "user-token"
    }))
    .expect("user");
    gw.store().save(&Session::User(user.clone())).expect("save");
    user
}

// =============================================================
// Login / registration
// =============================================================

#[tokio::test]
async fn login_persists_user_session() {
    let gw = gateway();
    gw.transport()
        .reply(200, &json!({ "token": "t1", "id": 7, "email": "ada@example.com", "fullName": "Ada" }));

    let session = gw.login_user("ada@example.com", "secret").await.expect("login");

    assert_eq!(session.id, "7");
    assert_eq!(gw.store().token(Role::User).as_deref(), Some("t1"));
    let sent = gw.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://backend.test/api/users/login");
    assert_eq!(sent.body, Body::Json(json!({ "email": "ada@example.com", "password": "secret" })));
}

#[tokio::test]
async fn login_without_token_persists_nothing() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "id": 7, "email": "ada@example.com" }));

    let err = gw.login_user("ada@example.com", "secret").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid response from server: missing token");
    assert!(gw.store().user().is_none());
}

#[tokio::test]
async fn login_rejection_surfaces_backend_error() {
    let gw = gateway();
    gw.transport().reply(403, &json!({ "error": "Account is suspended" }));

    let err = gw.login_user("ada@example.com", "secret").await.unwrap_err();

    assert_eq!(err.to_string(), "Account is suspended");
    assert!(gw.store().user().is_none());
}

#[tokio::test]
async fn register_conflict_has_fixed_message() {
    let gw = gateway();
    gw.transport().reply(409, &json!({ "error": "duplicate key" }));

    let err = gw.register_user("Ada", "ada@example.com", "pw").await.unwrap_err();

    assert_eq!(err, GatewayError::Rejected { status: 409, message: EMAIL_EXISTS.into() });
}

#[tokio::test]
async fn register_with_token_signs_in() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "id": 8, "email": "b@example.com", "fullName": "B", "token": "t2" }));

    let session = gw.register_user("B", "b@example.com", "pw").await.expect("register");

    assert_eq!(session.map(|s| s.id).as_deref(), Some("8"));
    assert_eq!(gw.store().token(Role::User).as_deref(), Some("t2"));
}

#[tokio::test]
async fn admin_login_strips_password_and_persists() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "id": 1, "username": "root", "token": "a1", "password": "hash" }));

    let session = gw.admin_login("root", "pw").await.expect("login");

    assert_eq!(session.username, "root");
    let raw = gw.store().read("admin").expect("stored");
    assert!(!raw.contains("hash"));
}

#[tokio::test]
async fn admin_login_without_token_has_fixed_message() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "id": 1 }));

    let err = gw.admin_login("root", "pw").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid response format - no token received");
    assert!(gw.store().admin().is_none());
}

#[tokio::test]
async fn admin_signup_conflict_has_fixed_message() {
    let gw = gateway();
    gw.transport().reply(409, &json!({}));
    let form = AdminSignup {
        username: "root".into(),
        password: "pw".into(),
        full_name: "Root".into(),
        email: "root@example.com".into(),
    };

    let err = gw.admin_signup(&form).await.unwrap_err();

    assert_eq!(err.to_string(), ADMIN_EXISTS);
}

// =============================================================
// Profile
// =============================================================

#[tokio::test]
async fn profile_update_merges_returned_user() {
    let gw = gateway();
    signed_in_user(&gw);
    gw.transport().reply(
        200,
        &json!({ "message": "Profile updated successfully", "user": { "id": 7, "fullName": "Ada King", "email": "ada@example.com" } }),
    );
    let update = ProfileUpdate {
        user_id: "7".into(),
        full_name: "Ada King".into(),
        current_password: None,
        new_password: None,
    };

    let session = gw.update_profile(&update).await.expect("update");

    assert_eq!(session.full_name, "Ada King");
    assert_eq!(session.token, "user-token");
    assert_eq!(gw.store().user().map(|u| u.full_name).as_deref(), Some("Ada King"));
    assert_eq!(gw.transport().last().url, "http://backend.test/api/users/profile");
}

#[tokio::test]
async fn profile_update_rejection_keeps_session() {
    let gw = gateway();
    signed_in_user(&gw);
    gw.transport().reply(404, &json!({ "error": "User not found" }));
    let update = ProfileUpdate {
        user_id: "7".into(),
        full_name: "X".into(),
        current_password: None,
        new_password: None,
    };

    let err = gw.update_profile(&update).await.unwrap_err();

    assert_eq!(err.to_string(), "User not found");
    assert_eq!(gw.store().user().map(|u| u.full_name).as_deref(), Some("Ada Lovelace"));
}

// =============================================================
// Documents
// =============================================================

#[tokio::test]
async fn upload_sends_file_and_email_parts() {
    let gw = gateway();
    let user = signed_in_user(&gw);
    gw.transport().reply(
        200,
        &json!({ "success": true, "fileName": "essay.txt", "similarityScore": 0.5, "content": "a b", "aiParts": [1] }),
    );
    let file = DocumentFile::new("essay.txt", None, b"a b".to_vec()).expect("valid");

    let result = gw.upload_document(&user, file, None).await.expect("upload");

    assert_eq!(result.file_name.as_deref(), Some("essay.txt"));
    let sent = gw.transport().last();
    assert_eq!(sent.url, "http://backend.test/api/files/upload/user?userId=7");
    assert_eq!(sent.header("Authorization"), Some("Bearer user-token"));
    let Body::Multipart(parts) = sent.body else {
        panic!("expected multipart body");
    };
    let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
    assert_eq!(names, vec!["file", "email"]);
    assert_eq!(parts[1], FormPart::text("email", "ada@example.com"));
}

#[tokio::test]
async fn upload_unsuccessful_payload_is_an_error() {
    let gw = gateway();
    let user = signed_in_user(&gw);
    gw.transport().reply(200, &json!({ "success": false, "message": "Could not extract text" }));
    let file = DocumentFile::new("essay.pdf", None, vec![1]).expect("valid");

    let err = gw.upload_document(&user, file, None).await.unwrap_err();

    assert_eq!(err, GatewayError::Rejected { status: 200, message: "Could not extract text".into() });
}

#[tokio::test]
async fn history_is_normalized() {
    let gw = gateway();
    signed_in_user(&gw);
    gw.transport().reply(
        200,
        &json!({ "uploads": [
            { "id": 1, "filename": "old.txt", "percentAI": 10, "timestamp": "2024-01-01T08:00:00" },
            { "id": 2, "filename": "new.txt", "percentAI": 42, "timestamp": "2024-05-01T08:00:00" }
        ] }),
    );

    let records = gw.fetch_history("7").await.expect("history");

    assert_eq!(gw.transport().last().url, "http://backend.test/api/files/history/7");
    assert_eq!(records[0].file_name, "new.txt");
    assert!((records[0].similarity_score - 0.42).abs() < f64::EPSILON);
}

#[tokio::test]
async fn history_not_found_uses_backend_error() {
    let gw = gateway();
    gw.transport().reply(404, &json!({ "error": "User not found with id: 9" }));

    let err = gw.fetch_history("9").await.unwrap_err();

    assert_eq!(err, GatewayError::Rejected { status: 404, message: "User not found with id: 9".into() });
}

// =============================================================
// Admin
// =============================================================

#[test]
fn users_query_carries_sort_and_status() {
    let query = UserQuery {
        sort: Sort { column: UserSortColumn::Email, order: SortOrder::Asc },
        status: StatusFilter::Suspended,
    };
    assert_eq!(
        users_request(&query).path_and_query(),
        "/api/admin/users?sortBy=email&sortOrder=asc&status=suspended"
    );
}

#[test]
fn documents_query_omits_empty_filters() {
    let query = DocumentQuery {
        sort: Sort { column: DocumentSortColumn::AiScore, order: SortOrder::Desc },
        ai_score_min: "50".into(),
        date_to: "2024-12-31".into(),
        ..DocumentQuery::default()
    };
    assert_eq!(
        documents_request(&query).path_and_query(),
        "/api/admin/documents?sortBy=ai_score&sortOrder=desc&aiScoreMin=50&dateTo=2024-12-31"
    );
}

#[tokio::test]
async fn list_users_tolerates_non_array_bodies() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "unexpected": true }));
    assert!(gw.list_users(&UserQuery::default()).await.expect("ok").is_empty());

    gw.transport().reply(200, &json!([{ "id": 3, "fullName": "C", "email": "c@x", "status": "active" }]));
    let users = gw.list_users(&UserQuery::default()).await.expect("ok");
    assert_eq!(users[0].id, "3");
}

#[tokio::test]
async fn status_update_puts_new_status() {
    let gw = gateway();
    gw.transport().reply(200, &json!({}));

    gw.update_user_status("3", UserStatus::Suspended).await.expect("ok");

    let sent = gw.transport().last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://backend.test/api/admin/users/3/status");
    assert_eq!(sent.body, Body::Json(json!({ "status": "suspended" })));
}

#[tokio::test]
async fn delete_document_targets_document_path() {
    let gw = gateway();
    gw.transport().reply(204, &json!(null));

    gw.delete_document("11").await.expect("ok");

    let sent = gw.transport().last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://backend.test/api/admin/documents/11");
}

#[tokio::test]
async fn stats_failure_uses_screen_fallback() {
    let gw = gateway();
    gw.transport().reply(403, &json!(null));

    let err = gw.dashboard_stats().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load dashboard statistics");
}

#[tokio::test]
async fn settings_round_trip_through_put() {
    let gw = gateway();
    gw.transport().reply(200, &json!({ "aiThreshold": 55, "backupInterval": "weekly" }));
    let mut settings = gw.settings().await.expect("load");
    assert_eq!(settings.ai_threshold, 55);

    settings.dark_mode = true;
    gw.transport().reply(200, &json!({}));
    gw.update_settings(&settings).await.expect("save");

    let Body::Json(sent) = gw.transport().last().body else {
        panic!("expected json body");
    };
    assert_eq!(sent["darkMode"], json!(true));
    assert_eq!(sent["backupInterval"], json!("weekly"));
}

#[tokio::test]
async fn logout_clears_only_the_given_role() {
    let gw = gateway();
    signed_in_user(&gw);
    gw.transport().reply(200, &json!({ "id": 1, "username": "root", "token": "a1" }));
    gw.admin_login("root", "pw").await.expect("admin");

    gw.logout(Role::Admin);

    assert!(gw.store().admin().is_none());
    assert!(gw.store().user().is_some());
}
