use super::*;

#[test]
fn default_matches_documented_values() {
    let cfg = GatewayConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_millis(60_000));
    assert_eq!(cfg.accepted_status, 200..500);
    assert_eq!(cfg.max_retries, 3);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = GatewayConfig::new("https://api.example.test/ ");
    assert_eq!(cfg.base_url, "https://api.example.test");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(GatewayConfig::from_base_url(Some("   ")).base_url, DEFAULT_BASE_URL);
    assert_eq!(GatewayConfig::from_base_url(None).base_url, DEFAULT_BASE_URL);
}

#[test]
fn retry_delay_is_linear_in_remaining_attempts() {
    let cfg = GatewayConfig::default();
    assert_eq!(cfg.retry_delay(3), Duration::from_millis(3_000));
    assert_eq!(cfg.retry_delay(2), Duration::from_millis(2_000));
    assert_eq!(cfg.retry_delay(1), Duration::from_millis(1_000));
    assert_eq!(cfg.retry_delay(0), Duration::ZERO);
}

#[test]
fn accepts_covers_success_and_client_errors_only() {
    let cfg = GatewayConfig::default();
    assert!(cfg.accepts(200));
    assert!(cfg.accepts(404));
    assert!(cfg.accepts(499));
    assert!(!cfg.accepts(500));
    assert!(!cfg.accepts(199));
}

#[test]
fn url_joins_with_single_slash() {
    let cfg = GatewayConfig::new("http://localhost:8080/");
    assert_eq!(cfg.url("/api/users/login"), "http://localhost:8080/api/users/login");
    assert_eq!(cfg.url("api/users/login"), "http://localhost:8080/api/users/login");
}
