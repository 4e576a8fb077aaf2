use super::*;

fn profile(new: &str, confirm: &str, current: &str) -> ProfileForm {
    ProfileForm {
        full_name: " Ada King ".into(),
        current_password: current.into(),
        new_password: new.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn name_only_update_sends_no_passwords() {
    let update = profile("", "", "ignored").to_update("7").expect("valid");
    assert_eq!(update.user_id, "7");
    assert_eq!(update.full_name, "Ada King");
    assert_eq!(update.current_password, None);
    assert_eq!(update.new_password, None);
}

#[test]
fn mismatched_new_passwords_are_rejected() {
    let err = profile("abc", "abd", "old").to_update("7").unwrap_err();
    assert_eq!(err.to_string(), NEW_PASSWORDS_DO_NOT_MATCH);
}

#[test]
fn password_change_requires_current() {
    let err = profile("abc", "abc", "").to_update("7").unwrap_err();
    assert_eq!(err.to_string(), CURRENT_PASSWORD_REQUIRED);
}

#[test]
fn password_change_carries_both_passwords() {
    let update = profile("abc", "abc", "old").to_update("7").expect("valid");
    assert_eq!(update.current_password.as_deref(), Some("old"));
    assert_eq!(update.new_password.as_deref(), Some("abc"));
}

#[test]
fn confirm_mismatch_has_shared_message() {
    assert!(confirm_password("a", "a").is_ok());
    assert_eq!(confirm_password("a", "b").unwrap_err().to_string(), PASSWORDS_DO_NOT_MATCH);
}

#[test]
fn admin_signup_checks_confirmation_first() {
    let form = AdminSignupForm {
        username: " root ".into(),
        full_name: "Root".into(),
        email: "root@example.com".into(),
        password: "pw".into(),
        confirm_password: "pw".into(),
    };
    assert_eq!(form.to_signup().expect("valid").username, "root");

    let bad = AdminSignupForm { confirm_password: "nope".into(), ..form };
    assert_eq!(bad.to_signup().unwrap_err(), GatewayError::Validation(PASSWORDS_DO_NOT_MATCH.into()));
}
