use super::*;
use crate::session::Role;

fn server(status: u16) -> GatewayError {
    GatewayError::Server { status, message: "boom".into() }
}

#[test]
fn classify_splits_on_accepted_range() {
    let cfg = GatewayConfig::default();
    assert_eq!(classify(&cfg, 200), Disposition::Deliver);
    assert_eq!(classify(&cfg, 404), Disposition::Deliver);
    assert_eq!(classify(&cfg, 499), Disposition::Deliver);
    assert_eq!(classify(&cfg, 401), Disposition::Unauthorized);
    assert_eq!(classify(&cfg, 500), Disposition::ServerError);
    assert_eq!(classify(&cfg, 503), Disposition::ServerError);
}

#[test]
fn server_errors_are_eligible_once() {
    let cfg = GatewayConfig::default();
    let mut req = RequestDescriptor::get("/api/admin/analytics");

    assert_eq!(plan_retry(&cfg, &mut req, &server(503)), Some(Duration::from_secs(2)));
    assert!(req.retried);
    assert_eq!(req.remaining_retries, 2);

    // Budget remains but the descriptor is spent.
    assert_eq!(plan_retry(&cfg, &mut req, &server(503)), None);
    assert_eq!(req.remaining_retries, 2);
}

#[test]
fn listed_statuses_are_never_retried() {
    let cfg = GatewayConfig::default();
    for status in NO_RETRY_STATUSES {
        let mut req = RequestDescriptor::get("/api/users/profile");
        let err = GatewayError::Rejected { status, message: "no".into() };
        assert_eq!(plan_retry(&cfg, &mut req, &err), None, "status {status}");
        assert!(!req.retried);
    }
    let mut req = RequestDescriptor::get("/api/users/profile");
    let err = GatewayError::Unauthorized { role: Role::User, message: None };
    assert_eq!(plan_retry(&cfg, &mut req, &err), None);
}

#[test]
fn failures_without_response_are_not_retried() {
    let cfg = GatewayConfig::default();
    let mut req = RequestDescriptor::get("/api/files/history/1");
    assert_eq!(plan_retry(&cfg, &mut req, &GatewayError::Network("refused".into())), None);
    assert_eq!(plan_retry(&cfg, &mut req, &GatewayError::Timeout { after_ms: 60_000 }), None);
}

#[test]
fn exhausted_budget_blocks_retry() {
    let cfg = GatewayConfig::default();
    let mut req = RequestDescriptor::get("/api/files/history/1");
    req.remaining_retries = 0;
    assert_eq!(plan_retry(&cfg, &mut req, &server(500)), None);
}

#[test]
fn last_unit_of_budget_retries_immediately() {
    let cfg = GatewayConfig::default();
    let mut req = RequestDescriptor::get("/api/files/history/1");
    req.remaining_retries = 1;
    assert_eq!(plan_retry(&cfg, &mut req, &server(502)), Some(Duration::ZERO));
}
