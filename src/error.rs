// SPDX-License-Identifier: MIT

//! Client error types shared by the fetchers and action handlers.

use reqwest::StatusCode;

/// Error type for every call that crosses the network boundary.
///
/// Read paths mostly degrade instead of returning these (see the fetcher
/// policies in `services`); write paths surface them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected our credentials. By the time a caller sees this,
    /// the session has already been cleared and a login redirect recorded.
    #[error("Authentication required")]
    Unauthorized,

    /// Non-2xx response other than 401.
    #[error("Backend returned HTTP {status}: {detail}")]
    Backend { status: StatusCode, detail: String },

    /// Request never completed (DNS, connect, body read, JSON decode).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A read or write path failed; carries the fixed user-facing message.
    /// The original cause is logged, never shown.
    #[error("{0}")]
    Unavailable(String),

    /// Client-side input rejection; handlers convert this to a form error
    /// state instead of returning it.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// True for the global 401 path.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// True when the backend answered 404 for the resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Backend { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Result type alias for fetchers and handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
