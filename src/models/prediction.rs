// SPDX-License-Identifier: MIT

//! Audit-log payloads for AI-assisted predictions.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// New audit-log entry for a prediction. `confidence_score` serializes as
/// `null` when absent; the backend expects the field to be present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPredictionLog {
    pub prediction_type: String,
    /// Serialized flow input.
    pub input_payload: String,
    /// Serialized flow output.
    pub output_payload: String,
    pub confidence_score: Option<f64>,
}

/// A stored prediction-log record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub prediction_type: String,
    pub input_payload: String,
    pub output_payload: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
