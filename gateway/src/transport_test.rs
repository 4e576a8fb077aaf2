use serde_json::json;

use super::*;

#[test]
fn error_field_wins_over_message() {
    let body = json!({ "error": "User not found", "message": "ignored" });
    assert_eq!(backend_message(&body).as_deref(), Some("User not found"));
}

#[test]
fn blank_error_falls_through_to_message() {
    let body = json!({ "error": "  ", "message": "Could not extract text" });
    assert_eq!(backend_message(&body).as_deref(), Some("Could not extract text"));
    assert_eq!(backend_message(&json!({ "error": 42 })), None);
    assert_eq!(backend_message(&Value::Null), None);
}

#[test]
fn raw_and_parsed_responses_agree() {
    let raw = RawResponse::new(404, r#"{"message":"No such document"}"#);
    let parsed = crate::gateway::Response::from(raw.clone());
    assert_eq!(raw.error_message(), parsed.message());
    assert_eq!(RawResponse::new(500, "<html>oops</html>").error_message(), None);
}

#[test]
fn redaction_masks_only_the_credential() {
    let body = Body::Empty;
    let request = OutboundRequest {
        method: Method::Get,
        url: "http://backend.test/api/files/history/7".into(),
        headers: vec![("authorization".into(), "Bearer secret".into()), ("Accept".into(), "application/json".into())],
        body: &body,
        timeout: Duration::from_secs(1),
    };
    let headers = request.redacted_headers();
    assert_eq!(headers[0].1, "[REDACTED]");
    assert_eq!(headers[1].1, "application/json");
}
