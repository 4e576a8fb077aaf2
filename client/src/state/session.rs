//! Signed-in identities for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and navbars read this instead of touching storage directly.
//! It is refreshed from the session store once hydration starts and updated
//! in place on login, profile update, and logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gateway::{AdminSession, Role, SessionStore, UserSession};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserSession>,
    pub admin: Option<AdminSession>,
    /// False until the stored sessions have been read (SSR and first paint).
    pub loaded: bool,
    /// Role the visitor just logged out of. Its guards stay quiet so the
    /// logout's own navigation wins.
    pub signed_out: Option<Role>,
}

impl SessionState {
    pub fn from_store<S: SessionStore>(store: &S) -> Self {
        Self { user: store.user(), admin: store.admin(), loaded: true, signed_out: None }
    }

    /// Whether `role` has a stored session with a non-empty id.
    pub fn is_signed_in(&self, role: Role) -> bool {
        match role {
            Role::User => self.user.as_ref().is_some_and(|u| !u.id.is_empty()),
            Role::Admin => self.admin.as_ref().is_some_and(|a| !a.id.is_empty()),
        }
    }

    pub fn sign_in_user(&mut self, user: UserSession) {
        self.user = Some(user);
        self.signed_out = None;
    }

    pub fn sign_in_admin(&mut self, admin: AdminSession) {
        self.admin = Some(admin);
        self.signed_out = None;
    }

    pub fn sign_out(&mut self, role: Role) {
        match role {
            Role::User => self.user = None,
            Role::Admin => self.admin = None,
        }
        self.signed_out = Some(role);
    }

    pub fn display_name(&self, role: Role) -> String {
        match role {
            Role::User => self.user.as_ref().map(|u| u.full_name.clone()),
            Role::Admin => self.admin.as_ref().map(|a| a.full_name.clone()),
        }
        .filter(|n| !n.is_empty())
        .unwrap_or_default()
    }
}
