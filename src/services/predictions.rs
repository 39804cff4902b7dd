// SPDX-License-Identifier: MIT

//! Prediction audit-log write path.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::prediction::{NewPredictionLog, PredictionLog};
use crate::schema;

/// Fixed user-facing message when the audit-log write path fails.
const PREDICTION_LOG_FAILED: &str = "Could not log the ML prediction.";
/// Message when the backend acknowledged the log with a malformed body.
const PREDICTION_LOG_INVALID: &str = "Invalid data received from server after logging prediction.";

#[derive(Clone)]
pub struct PredictionLogService {
    api: ApiClient,
}

impl PredictionLogService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Record an AI prediction event.
    pub async fn log(&self, entry: &NewPredictionLog) -> Result<PredictionLog, ApiError> {
        let value = self
            .api
            .post_value("/ml-predictions/log", entry)
            .await
            .map_err(|e| {
                tracing::error!(
                    prediction_type = %entry.prediction_type,
                    error = %e,
                    "Failed to log ML prediction"
                );
                ApiError::Unavailable(PREDICTION_LOG_FAILED.to_string())
            })?;

        match schema::decode_entity::<PredictionLog>("prediction log", value) {
            Some(log) => Ok(log),
            None => Err(ApiError::Unavailable(PREDICTION_LOG_INVALID.to_string())),
        }
    }
}
