// SPDX-License-Identifier: MIT

//! Login, registration and current-user access.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::user::{AuthResponse, LoginForm, RegisterForm, UserPublic};
use crate::schema;
use crate::session::SessionStore;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Log in. When a token comes back it is stored in the session, and the
    /// profile is fetched and cached alongside it.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthResponse, ApiError> {
        form.validate()
            .map_err(|e| ApiError::Validation(schema::validation_message(&e, &["email", "password"])))?;

        let value = self.api.post_value("/auth/login", form).await?;
        let response: AuthResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid login response: {}", e)))?;

        if let Some(token) = &response.token {
            self.session.set_token(token.clone());
            if let Some(user) = self.get_me().await {
                self.session.set_profile(Some(user));
            }
        }

        Ok(response)
    }

    /// Register a new user. Write path: failures are visible to the caller.
    pub async fn register(&self, form: &RegisterForm) -> Result<UserPublic, ApiError> {
        form.validate().map_err(|e| {
            ApiError::Validation(schema::validation_message(&e, &["name", "email", "password"]))
        })?;

        let value = self.api.post_value("/users/register", form).await?;
        serde_json::from_value(value).map_err(|e| {
            ApiError::Internal(anyhow::anyhow!("Invalid registration response: {}", e))
        })
    }

    /// The current user's profile, or `None` when the call fails for any
    /// reason.
    pub async fn get_me(&self) -> Option<UserPublic> {
        match self.api.get_value("/users/me").await {
            Ok(value) => schema::decode_entity("user", value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch current user");
                None
            }
        }
    }

    /// Clear the session and send the UI to the login surface.
    pub fn logout(&self) {
        self.session.expire_to_login();
    }
}
