//! Typed backend endpoints.
//!
//! Each operation builds a [`RequestDescriptor`], sends it through the
//! [`Gateway`], and turns the accepted response into a typed value or a
//! displayable [`GatewayError`]. Login operations persist the resulting
//! session; logout clears exactly one role.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::request::{FormPart, RequestDescriptor, segment};
use crate::session::{AdminSession, Role, Session, SessionStore, UserSession, parse_admin_login, parse_user_login};
use crate::transport::{Navigator, Progress, Timer, Transport};
use crate::types::{
    AdminDocument, AdminSignup, AdminUser, Analytics, DashboardStats, DocumentQuery, HistoryResponse, ProfileUpdate,
    SystemSettings, UploadRecord, UploadResult, UserQuery, UserStatus, normalize_history,
};
use crate::upload::DocumentFile;

pub const USERS_LOGIN: &str = "/api/users/login";
pub const USERS_REGISTER: &str = "/api/users/register";
pub const USERS_FORGOT_PASSWORD: &str = "/api/users/forgot-password";
pub const USERS_RESET_PASSWORD: &str = "/api/users/reset-password";
pub const USERS_PROFILE: &str = "/api/users/profile";
pub const FILES_UPLOAD: &str = "/api/files/upload/user";
pub const ADMIN_LOGIN: &str = "/api/admin/login";
pub const ADMIN_SIGNUP: &str = "/api/admin/signup";
pub const ADMIN_STATS: &str = "/api/admin/dashboard/stats";
pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_DOCUMENTS: &str = "/api/admin/documents";
pub const ADMIN_ANALYTICS: &str = "/api/admin/analytics";
pub const ADMIN_SETTINGS: &str = "/api/admin/settings";

pub const EMAIL_EXISTS: &str = "Email already exists";
pub const ADMIN_EXISTS: &str = "Username or email already exists";
const CONFLICT: u16 = 409;

#[must_use]
pub fn history_path(user_id: &str) -> String {
    format!("/api/files/history/{}", segment(user_id))
}

#[must_use]
pub fn user_status_path(user_id: &str) -> String {
    format!("{ADMIN_USERS}/{}/status", segment(user_id))
}

#[must_use]
pub fn document_path(document_id: &str) -> String {
    format!("{ADMIN_DOCUMENTS}/{}", segment(document_id))
}

#[must_use]
pub fn users_request(query: &UserQuery) -> RequestDescriptor {
    RequestDescriptor::get(ADMIN_USERS)
        .query("sortBy", query.sort.column.as_str())
        .query("sortOrder", query.sort.order.as_str())
        .query("status", query.status.as_str())
}

#[must_use]
pub fn documents_request(query: &DocumentQuery) -> RequestDescriptor {
    RequestDescriptor::get(ADMIN_DOCUMENTS)
        .query("sortBy", query.sort.column.as_str())
        .query("sortOrder", query.sort.order.as_str())
        .query_opt("aiScoreMin", Some(&query.ai_score_min))
        .query_opt("aiScoreMax", Some(&query.ai_score_max))
        .query_opt("dateFrom", Some(&query.date_from))
        .query_opt("dateTo", Some(&query.date_to))
}

fn encode<B: serde::Serialize>(body: &B) -> Result<Value, GatewayError> {
    serde_json::to_value(body).map_err(|e| GatewayError::Validation(e.to_string()))
}

/// Admin list endpoints answer with a bare array; anything else is empty.
fn array_or_empty<T: serde::de::DeserializeOwned>(body: &Value) -> Vec<T> {
    match body {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

impl<T, S, N, C> Gateway<T, S, N, C>
where
    T: Transport,
    S: SessionStore,
    N: Navigator,
    C: Timer,
{
    // =========================================================================
    // USER ACCOUNT
    // =========================================================================

    /// Sign in an end user and persist the `user` session.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on bad credentials and
    /// [`GatewayError::InvalidResponse`] when no token comes back. Nothing is
    /// persisted on failure.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<UserSession, GatewayError> {
        let request = RequestDescriptor::post(USERS_LOGIN).json(json!({ "email": email, "password": password }));
        let response = self.send(request).await?;
        let session = parse_user_login(&response.body)?;
        self.store().save(&Session::User(session.clone()))?;
        log::info!("api: user {} signed in", session.id);
        Ok(session)
    }

    /// Create an account; signs the user in when the backend returns a token.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] with [`EMAIL_EXISTS`] on conflict.
    pub async fn register_user(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<UserSession>, GatewayError> {
        let request = RequestDescriptor::post(USERS_REGISTER)
            .json(json!({ "fullName": full_name, "email": email, "password": password }));
        let response = self.send(request).await?;
        if response.status == CONFLICT {
            return Err(GatewayError::Rejected { status: CONFLICT, message: EMAIL_EXISTS.to_owned() });
        }
        let response = response.ok_or_rejected("Registration failed. Please try again.")?;
        if response.body.get("token").and_then(Value::as_str).is_none() {
            return Ok(None);
        }
        let session = parse_user_login(&response.body)?;
        self.store().save(&Session::User(session.clone()))?;
        Ok(Some(session))
    }

    /// Ask the backend to email a reset link.
    ///
    /// # Errors
    ///
    /// Returns the backend's message, e.g. for an unknown address.
    pub async fn forgot_password(&self, email: &str) -> Result<String, GatewayError> {
        let request = RequestDescriptor::post(USERS_FORGOT_PASSWORD).json(json!({ "email": email }));
        self.send(request).await?.ok_or_rejected("Failed to process request")?;
        Ok("Password reset link has been sent to your email.".to_owned())
    }

    /// Set a new password using the emailed reset token.
    ///
    /// # Errors
    ///
    /// Returns the backend's message for an invalid or expired token.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<String, GatewayError> {
        let request = RequestDescriptor::post(USERS_RESET_PASSWORD).json(json!({ "token": token, "password": password }));
        self.send(request).await?.ok_or_rejected("Failed to reset password")?;
        Ok("Password reset successful. You can now login with your new password.".to_owned())
    }

    /// Update the profile and merge the returned `user` into the stored session.
    ///
    /// # Errors
    ///
    /// Returns the backend's message, or [`GatewayError::InvalidResponse`]
    /// when no user is signed in or the reply carries no `user`.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserSession, GatewayError> {
        let request = RequestDescriptor::put(USERS_PROFILE).json(encode(update)?);
        let response = self.send(request).await?.ok_or_rejected("Failed to update profile. Please try again.")?;
        let Some(Value::Object(changes)) = response.body.get("user") else {
            return Err(GatewayError::InvalidResponse("Invalid response from server: missing user".to_owned()));
        };

        let current = self
            .store()
            .user()
            .ok_or_else(|| GatewayError::InvalidResponse("Please log in to update your profile".to_owned()))?;
        let mut merged = match serde_json::to_value(&current) {
            Ok(Value::Object(map)) => map,
            _ => return Err(GatewayError::Storage("stored user session is not an object".to_owned())),
        };
        for (key, value) in changes {
            merged.insert(key.clone(), value.clone());
        }
        let session: UserSession = serde_json::from_value(Value::Object(merged))
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        self.store().save(&Session::User(session.clone()))?;
        Ok(session)
    }

    // =========================================================================
    // DOCUMENTS
    // =========================================================================

    /// Upload `file` for `user` and return the analysis.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies and for
    /// `success: false` payloads, carrying the backend's message.
    pub async fn upload_document(
        &self,
        user: &UserSession,
        file: DocumentFile,
        progress: Option<Progress<'_>>,
    ) -> Result<UploadResult, GatewayError> {
        let size = file.bytes.len();
        let request = RequestDescriptor::post(FILES_UPLOAD)
            .query("userId", user.id.as_str())
            .multipart(vec![file.into_part(), FormPart::text("email", &user.email)]);
        log::info!("api: uploading document ({size} bytes) for user {}", user.id);

        let response = self.send_with_progress(request, progress).await?;
        let status = response.status;
        let response = response.ok_or_rejected("Upload failed")?;
        let result: UploadResult = response.json()?;
        if !result.success {
            let message = result.message.unwrap_or_else(|| "Upload failed".to_owned());
            return Err(GatewayError::Rejected { status, message });
        }
        Ok(result)
    }

    /// Upload history for `user_id`, normalized and newest first.
    ///
    /// # Errors
    ///
    /// Returns the backend's message, e.g. for an unknown user.
    pub async fn fetch_history(&self, user_id: &str) -> Result<Vec<UploadRecord>, GatewayError> {
        let response = self
            .send(RequestDescriptor::get(history_path(user_id)))
            .await?
            .ok_or_rejected("Failed to load upload history")?;
        let history: HistoryResponse = response.json()?;
        Ok(normalize_history(history.uploads))
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    /// Sign in an administrator and persist the `admin` session.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on bad credentials and
    /// [`GatewayError::InvalidResponse`] when no token comes back.
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<AdminSession, GatewayError> {
        let request = RequestDescriptor::post(ADMIN_LOGIN).json(json!({ "username": username, "password": password }));
        let response = self.send(request).await?;
        if !response.is_success() && response.body.get("token").is_none() {
            let message = response.message().unwrap_or_else(|| "Login failed. Please try again.".to_owned());
            return Err(GatewayError::Rejected { status: response.status, message });
        }
        let session = parse_admin_login(&response.body)?;
        self.store().save(&Session::Admin(session.clone()))?;
        log::info!("api: admin {} signed in", session.id);
        Ok(session)
    }

    /// Create an administrator account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] with [`ADMIN_EXISTS`] on conflict.
    pub async fn admin_signup(&self, form: &AdminSignup) -> Result<(), GatewayError> {
        let response = self.send(RequestDescriptor::post(ADMIN_SIGNUP).json(encode(form)?)).await?;
        if response.status == CONFLICT {
            return Err(GatewayError::Rejected { status: CONFLICT, message: ADMIN_EXISTS.to_owned() });
        }
        response.ok_or_rejected("Server error - please try again")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, GatewayError> {
        self.send(RequestDescriptor::get(ADMIN_STATS))
            .await?
            .ok_or_rejected("Failed to load dashboard statistics")?
            .json()
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<AdminUser>, GatewayError> {
        let response = self.send(users_request(query)).await?.ok_or_rejected("Failed to load users")?;
        Ok(array_or_empty(&response.body))
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn update_user_status(&self, user_id: &str, status: UserStatus) -> Result<(), GatewayError> {
        let request = RequestDescriptor::put(user_status_path(user_id)).json(json!({ "status": status.as_str() }));
        self.send(request).await?.ok_or_rejected("Failed to update user status")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn list_documents(&self, query: &DocumentQuery) -> Result<Vec<AdminDocument>, GatewayError> {
        let response = self.send(documents_request(query)).await?.ok_or_rejected("Failed to load documents")?;
        Ok(array_or_empty(&response.body))
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn delete_document(&self, document_id: &str) -> Result<(), GatewayError> {
        self.send(RequestDescriptor::delete(document_path(document_id)))
            .await?
            .ok_or_rejected("Failed to delete document")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn analytics(&self) -> Result<Analytics, GatewayError> {
        self.send(RequestDescriptor::get(ADMIN_ANALYTICS))
            .await?
            .ok_or_rejected("Failed to load analytics data")?
            .json()
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn settings(&self) -> Result<SystemSettings, GatewayError> {
        self.send(RequestDescriptor::get(ADMIN_SETTINGS))
            .await?
            .ok_or_rejected("Failed to load settings")?
            .json()
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-2xx replies.
    pub async fn update_settings(&self, settings: &SystemSettings) -> Result<(), GatewayError> {
        self.send(RequestDescriptor::put(ADMIN_SETTINGS).json(encode(settings)?))
            .await?
            .ok_or_rejected("Failed to update settings")?;
        Ok(())
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Drop the session for `role`; the other role is untouched.
    pub fn logout(&self, role: Role) {
        self.store().clear(role);
        log::info!("api: {} signed out", role.storage_key());
    }
}
