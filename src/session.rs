// SPDX-License-Identifier: MIT

//! Session credential storage.
//!
//! Holds the bearer token, the cached profile of the logged-in user, and a
//! pending navigation target for the UI host. Token and profile are always
//! cleared together.

use crate::models::user::UserPublic;
use std::sync::RwLock;

/// Where the UI is sent when credentials are cleared.
const LOGIN_PATH: &str = "/login";

#[derive(Debug, Default)]
struct SessionInner {
    token: Option<String>,
    profile: Option<UserPublic>,
    pending_redirect: Option<String>,
}

/// Process-wide session state shared by the HTTP client and the UI host.
///
/// A 401 from any backend call lands here via [`SessionStore::expire_to_login`],
/// regardless of which fetcher made the call.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<SessionInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.read().expect("session lock poisoned").token.clone()
    }

    pub fn set_token(&self, token: String) {
        self.inner.write().expect("session lock poisoned").token = Some(token);
    }

    /// Cached profile of the logged-in user.
    pub fn profile(&self) -> Option<UserPublic> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .profile
            .clone()
    }

    pub fn set_profile(&self, profile: Option<UserPublic>) {
        self.inner.write().expect("session lock poisoned").profile = profile;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").token.is_some()
    }

    /// Drop all credentials and record a redirect to the login surface.
    ///
    /// Used by the global 401 path and by logout.
    pub fn expire_to_login(&self) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = None;
        inner.profile = None;
        inner.pending_redirect = Some(LOGIN_PATH.to_string());
    }

    /// Navigation target recorded for the UI host, consumed on read.
    pub fn take_redirect(&self) -> Option<String> {
        self.inner
            .write()
            .expect("session lock poisoned")
            .pending_redirect
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_token_and_profile_together() {
        let session = SessionStore::new();
        session.set_token("jwt".to_string());

        session.expire_to_login();

        assert_eq!(session.token(), None);
        assert_eq!(session.profile(), None);
        assert_eq!(session.take_redirect().as_deref(), Some("/login"));
    }

    #[test]
    fn test_redirect_is_consumed_on_read() {
        let session = SessionStore::new();
        session.expire_to_login();

        assert!(session.take_redirect().is_some());
        assert!(session.take_redirect().is_none());
    }
}
