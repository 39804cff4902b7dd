// SPDX-License-Identifier: MIT

//! HTTP gateway to the carpool backend.
//!
//! Every outbound request picks up the session bearer token when one is
//! present; a 401 response clears the session and records a redirect to the
//! login surface before the error is returned, so the caller's own error
//! path still fires. No retry, no backoff, no timeout policy.

use crate::config::Config;
use crate::error::ApiError;
use crate::session::SessionStore;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// HTTP client for the backend API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// GET a JSON body.
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.http.get(self.url(path));
        self.execute(request).await
    }

    /// GET a JSON body with query parameters.
    pub async fn get_value_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        self.execute(request).await
    }

    /// POST a JSON payload and return the JSON response body.
    pub async fn post_value<B>(&self, path: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(&self, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Global 401 policy: drop credentials and send the UI to the
            // login surface, then still fail the call.
            tracing::warn!("Backend returned 401, clearing session");
            self.session.expire_to_login();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApiError::Backend { status, detail });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("JSON parse error: {}", e)))
    }
}
