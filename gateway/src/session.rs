//! Role-scoped sessions and their client-local persistence.
//!
//! DESIGN
//! ======
//! Each role owns exactly one storage slot (`user` / `admin`) holding the JSON
//! login payload. Slots are read at request time and written only on login,
//! profile update, logout, or an authorization failure for that role.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::GatewayError;

/// Path marker that routes a request through the admin credential.
pub const ADMIN_NAMESPACE: &str = "/admin/";

const MISSING_USER_TOKEN: &str = "Invalid response from server: missing token";
const MISSING_ADMIN_TOKEN: &str = "Invalid response format - no token received";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Admin iff the path is under the admin namespace.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        if path.contains(ADMIN_NAMESPACE) { Self::Admin } else { Self::User }
    }

    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn login_route(self) -> &'static str {
        match self {
            Self::User => "/login",
            Self::Admin => "/admin/login",
        }
    }
}

/// A signed-in end user, as returned by `POST /api/users/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub token: String,
    /// Remaining login payload fields (`role`, `status`, `lastLogin`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A signed-in administrator, as returned by `POST /api/admin/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    User(UserSession),
    Admin(AdminSession),
}

impl Session {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::User(_) => Role::User,
            Self::Admin(_) => Role::Admin,
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::User(s) => &s.token,
            Self::Admin(s) => &s.token,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User(s) => &s.id,
            Self::Admin(s) => &s.id,
        }
    }

    fn to_json(&self) -> Result<String, GatewayError> {
        let encoded = match self {
            Self::User(s) => serde_json::to_string(s),
            Self::Admin(s) => serde_json::to_string(s),
        };
        encoded.map_err(|e| GatewayError::Storage(e.to_string()))
    }
}

/// Parse a user login payload, rejecting payloads without a token.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidResponse`] when the token is missing or the
/// payload does not describe a user.
pub fn parse_user_login(payload: &Value) -> Result<UserSession, GatewayError> {
    require_token(payload, MISSING_USER_TOKEN)?;
    serde_json::from_value(payload.clone()).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Parse an admin login payload, rejecting payloads without a token.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidResponse`] when the token is missing or the
/// payload does not describe an admin.
pub fn parse_admin_login(payload: &Value) -> Result<AdminSession, GatewayError> {
    require_token(payload, MISSING_ADMIN_TOKEN)?;
    let mut session: AdminSession =
        serde_json::from_value(payload.clone()).map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
    // The admin login payload echoes the password hash; never persist it.
    session.extra.remove("password");
    Ok(session)
}

fn require_token(payload: &Value, fallback: &str) -> Result<(), GatewayError> {
    let has_token = payload.get("token").and_then(Value::as_str).is_some_and(|t| !t.is_empty());
    if has_token {
        return Ok(());
    }
    let message = payload.get("error").and_then(Value::as_str).unwrap_or(fallback);
    Err(GatewayError::InvalidResponse(message.to_owned()))
}

/// Client-local key/value storage for the two session slots.
///
/// Implementors provide raw string access; the provided methods own the
/// JSON layout.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] when the slot cannot be written.
    fn write(&self, key: &str, raw: &str) -> Result<(), GatewayError>;

    fn remove(&self, key: &str);

    /// Bearer token stored for `role`, if any.
    fn token(&self, role: Role) -> Option<String> {
        let raw = self.read(role.storage_key())?;
        let value: Value = serde_json::from_str(&raw).ok()?;
        value
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
    }

    fn user(&self) -> Option<UserSession> {
        let raw = self.read(Role::User.storage_key())?;
        serde_json::from_str(&raw).ok()
    }

    fn admin(&self) -> Option<AdminSession> {
        let raw = self.read(Role::Admin.storage_key())?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist `session` into its role's slot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] when encoding or writing fails.
    fn save(&self, session: &Session) -> Result<(), GatewayError> {
        let raw = session.to_json()?;
        self.write(session.role().storage_key(), &raw)
    }

    fn clear(&self, role: Role) {
        self.remove(role.storage_key());
    }
}

/// In-process store used by SSR rendering and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), GatewayError> {
        self.slots.borrow_mut().insert(key.to_owned(), raw.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

/// Accept backend identifiers encoded as JSON numbers or strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected id string or number, got {other}"))),
    }
}
