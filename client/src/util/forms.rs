//! Local form checks that run before any request is sent.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use gateway::GatewayError;
use gateway::types::{AdminSignup, ProfileUpdate};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const NEW_PASSWORDS_DO_NOT_MATCH: &str = "New passwords do not match";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required to change password";

fn invalid(message: &str) -> GatewayError {
    GatewayError::Validation(message.to_owned())
}

/// Password + confirmation pair for reset and admin signup.
pub fn confirm_password(password: &str, confirm: &str) -> Result<(), GatewayError> {
    if password == confirm { Ok(()) } else { Err(invalid(PASSWORDS_DO_NOT_MATCH)) }
}

/// Raw profile form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Build the update payload. A blank new password means the password
    /// is left unchanged and the current password is not sent.
    pub fn to_update(&self, user_id: &str) -> Result<ProfileUpdate, GatewayError> {
        let changing = !self.new_password.is_empty();
        if changing {
            if self.new_password != self.confirm_password {
                return Err(invalid(NEW_PASSWORDS_DO_NOT_MATCH));
            }
            if self.current_password.is_empty() {
                return Err(invalid(CURRENT_PASSWORD_REQUIRED));
            }
        }
        Ok(ProfileUpdate {
            user_id: user_id.to_owned(),
            full_name: self.full_name.trim().to_owned(),
            current_password: changing.then(|| self.current_password.clone()),
            new_password: changing.then(|| self.new_password.clone()),
        })
    }
}

/// Raw admin signup form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminSignupForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AdminSignupForm {
    pub fn to_signup(&self) -> Result<AdminSignup, GatewayError> {
        confirm_password(&self.password, &self.confirm_password)?;
        Ok(AdminSignup {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
        })
    }
}
