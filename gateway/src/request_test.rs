use super::*;
use serde_json::json;

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[test]
fn new_descriptor_starts_with_full_budget() {
    let req = RequestDescriptor::get("/api/files/history/7");
    assert_eq!(req.remaining_retries, 3);
    assert!(!req.retried);
    assert_eq!(req.body, Body::Empty);
}

#[test]
fn role_follows_admin_namespace() {
    assert_eq!(RequestDescriptor::get("/api/admin/users").role(), Role::Admin);
    assert_eq!(RequestDescriptor::get("/api/users/profile").role(), Role::User);
}

#[test]
fn path_and_query_encodes_values() {
    let req = RequestDescriptor::get("/api/admin/documents")
        .query("sortBy", "upload_date")
        .query("dateFrom", "2024-01-01")
        .query("q", "a b&c");
    assert_eq!(
        req.path_and_query(),
        "/api/admin/documents?sortBy=upload_date&dateFrom=2024-01-01&q=a%20b%26c"
    );
}

#[test]
fn path_and_query_extends_existing_query() {
    let req = RequestDescriptor::post("/api/files/upload/user?userId=7").query("x", "1");
    assert_eq!(req.path_and_query(), "/api/files/upload/user?userId=7&x=1");
}

#[test]
fn query_opt_skips_blank_values() {
    let req = RequestDescriptor::get("/api/admin/documents")
        .query_opt("aiScoreMin", Some(""))
        .query_opt("aiScoreMax", Some("  "))
        .query_opt("dateFrom", None)
        .query_opt("dateTo", Some("2024-02-01"));
    assert_eq!(req.path_and_query(), "/api/admin/documents?dateTo=2024-02-01");
}

#[test]
fn json_requests_carry_default_headers() {
    let req = RequestDescriptor::post("/api/users/login").json(json!({ "email": "a@b.c" }));
    let headers = req.outbound_headers(None);
    assert_eq!(header(&headers, CONTENT_TYPE), Some(JSON_MIME));
    assert_eq!(header(&headers, ACCEPT), Some(JSON_MIME));
    assert_eq!(header(&headers, AUTHORIZATION), None);
}

#[test]
fn multipart_requests_omit_content_type() {
    let req = RequestDescriptor::post("/api/files/upload/user")
        .header("Content-Type", "multipart/form-data")
        .multipart(vec![FormPart::text("email", "a@b.c")]);
    let headers = req.outbound_headers(Some("tok"));
    assert_eq!(header(&headers, CONTENT_TYPE), None);
    assert_eq!(header(&headers, ACCEPT), Some(JSON_MIME));
}

#[test]
fn caller_authorization_is_replaced_by_session_token() {
    let req = RequestDescriptor::get("/api/users/profile").header("authorization", "Bearer stale");
    let headers = req.outbound_headers(Some("fresh"));
    let auth: Vec<_> = headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case(AUTHORIZATION)).collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth[0].1, "Bearer fresh");
}

#[test]
fn caller_authorization_is_dropped_without_session() {
    let req = RequestDescriptor::get("/api/users/profile").header("Authorization", "Bearer stale");
    assert_eq!(header(&req.outbound_headers(None), AUTHORIZATION), None);
}

#[test]
fn caller_headers_override_defaults() {
    let req = RequestDescriptor::get("/api/admin/analytics").header("Accept", "text/csv");
    let headers = req.outbound_headers(None);
    assert_eq!(header(&headers, ACCEPT), Some("text/csv"));
    assert_eq!(headers.iter().filter(|(k, _)| k == ACCEPT).count(), 1);
}

#[test]
fn body_summary_hides_multipart_payload() {
    let body = Body::Multipart(vec![FormPart::File {
        name: "file".into(),
        file_name: "essay.pdf".into(),
        mime: None,
        bytes: vec![1, 2, 3],
    }]);
    assert_eq!(body.summary(), "[multipart: 1 parts]");
}

#[test]
fn segment_escapes_reserved_characters() {
    assert_eq!(segment("a/b c"), "a%2Fb%20c");
}
