use super::*;

#[test]
fn status_is_reported_only_for_received_responses() {
    assert_eq!(GatewayError::Server { status: 503, message: "down".into() }.status(), Some(503));
    assert_eq!(GatewayError::Rejected { status: 404, message: "missing".into() }.status(), Some(404));
    assert_eq!(GatewayError::Unauthorized { role: Role::User, message: None }.status(), Some(401));
    assert_eq!(GatewayError::Network("refused".into()).status(), None);
    assert_eq!(GatewayError::Timeout { after_ms: 60_000 }.status(), None);
}

#[test]
fn unauthorized_message_prefers_backend_text() {
    let err = GatewayError::Unauthorized { role: Role::User, message: Some("Invalid credentials".into()) };
    assert_eq!(err.user_message(), "Invalid credentials");

    let err = GatewayError::Unauthorized { role: Role::Admin, message: None };
    assert_eq!(err.user_message(), "Session expired. Please log in again.");
}

#[test]
fn rejected_renders_backend_message_verbatim() {
    let err = GatewayError::Rejected { status: 409, message: "Email already exists".into() };
    assert_eq!(err.to_string(), "Email already exists");
}
