// SPDX-License-Identifier: MIT

//! Form-to-result bridge for the AI helper features and payments.
//!
//! Each handler parses raw form input into a strict schema, invokes its
//! capability inside a failure boundary, and reports a tri-state outcome
//! for rendering. Validation failures never reach the network.

use crate::ai::{
    FareEstimate, FareEstimateInput, FareFlow, FuelPreference, MeetingPointFlow, MeetingPointInput,
    MeetingPointSuggestion,
};
use crate::models::payment::{Payment, PaymentRequest};
use crate::models::prediction::NewPredictionLog;
use crate::schema;
use crate::services::{PaymentService, PredictionLogService};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use validator::{Validate, ValidationError};

/// Outcome of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Success,
    Error,
}

/// Tri-state form result driving UI rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    pub status: FormStatus,
    pub message: String,
    pub result: Option<T>,
}

impl<T> FormState<T> {
    /// State before any submission.
    pub fn idle() -> Self {
        Self {
            status: FormStatus::Idle,
            message: String::new(),
            result: None,
        }
    }

    fn success(message: impl Into<String>, result: T) -> Self {
        Self {
            status: FormStatus::Success,
            message: message.into(),
            result: Some(result),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Error,
            message: message.into(),
            result: None,
        }
    }
}

/// Raw meeting-point form fields, as submitted. Blank entries are dropped
/// before validation.
#[derive(Debug, Clone, Default)]
pub struct MeetingPointForm {
    pub locations: Vec<String>,
}

/// Raw fare-estimator form fields, as submitted.
#[derive(Debug, Clone, Default)]
pub struct FareForm {
    pub start_location: String,
    pub end_location: String,
    pub fuel_type: String,
}

/// Raw payment form fields, as submitted.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub booking_id: String,
    pub amount: f64,
    pub payment_method: Option<String>,
}

#[derive(Debug, Validate)]
struct MeetingPointSubmission {
    #[validate(
        length(min = 2, message = "At least two locations are required."),
        custom(function = validate_location_lengths)
    )]
    locations: Vec<String>,
}

fn validate_location_lengths(locations: &[String]) -> Result<(), ValidationError> {
    if locations.iter().any(|l| l.chars().count() < 3) {
        let mut error = ValidationError::new("length");
        error.message = Some("Location must be at least 3 characters long.".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Validate)]
struct FareSubmission {
    #[validate(length(min = 3, message = "Start location must be at least 3 characters long."))]
    start_location: String,
    #[validate(length(min = 3, message = "End location must be at least 3 characters long."))]
    end_location: String,
}

/// Handlers binding forms to the AI flows and the payment write path.
pub struct ActionHandlers {
    meeting_flow: Arc<dyn MeetingPointFlow>,
    fare_flow: Arc<dyn FareFlow>,
    predictions: PredictionLogService,
    payments: PaymentService,
}

impl ActionHandlers {
    pub fn new(
        meeting_flow: Arc<dyn MeetingPointFlow>,
        fare_flow: Arc<dyn FareFlow>,
        predictions: PredictionLogService,
        payments: PaymentService,
    ) -> Self {
        Self {
            meeting_flow,
            fare_flow,
            predictions,
            payments,
        }
    }

    /// Suggest a meeting point for the submitted participant locations.
    pub async fn suggest_meeting_point(
        &self,
        form: &MeetingPointForm,
    ) -> FormState<MeetingPointSuggestion> {
        let submission = MeetingPointSubmission {
            locations: form
                .locations
                .iter()
                .filter(|l| !l.trim().is_empty())
                .cloned()
                .collect(),
        };

        if let Err(errors) = submission.validate() {
            let messages = schema::field_messages(&errors, "locations");
            let message = if messages.is_empty() {
                "Validation failed.".to_string()
            } else {
                messages.join(", ")
            };
            return FormState::error(message);
        }

        let input = MeetingPointInput {
            locations: submission.locations,
        };

        match self.meeting_flow.suggest(&input).await {
            Ok(result) => {
                self.audit("meeting_point_suggestion", &input, &result);
                FormState::success("Successfully found a meeting point.", result)
            }
            Err(e) => {
                tracing::error!(error = %e, "Meeting point flow failed");
                FormState::error(
                    "An error occurred while suggesting a meeting point. Please try again.",
                )
            }
        }
    }

    /// Estimate the fare for a ride between two locations.
    pub async fn predict_fare(&self, form: &FareForm) -> FormState<FareEstimate> {
        let submission = FareSubmission {
            start_location: form.start_location.clone(),
            end_location: form.end_location.clone(),
        };

        // Location messages take precedence over the generic enum failure.
        if let Err(errors) = submission.validate() {
            return FormState::error(schema::validation_message(
                &errors,
                &["start_location", "end_location"],
            ));
        }

        let fuel_type = match FuelPreference::from_str(&form.fuel_type) {
            Ok(fuel_type) => fuel_type,
            Err(_) => return FormState::error("Validation failed."),
        };

        let input = FareEstimateInput {
            start_location: submission.start_location,
            end_location: submission.end_location,
            fuel_type,
        };

        match self.fare_flow.predict(&input).await {
            Ok(result) => {
                self.audit("fare_prediction", &input, &result);
                FormState::success("Successfully estimated fare.", result)
            }
            Err(e) => {
                tracing::error!(error = %e, "Fare prediction flow failed");
                FormState::error(format!(
                    "An error occurred while estimating the fare: {}",
                    e
                ))
            }
        }
    }

    /// Submit a payment for a booking.
    pub async fn submit_payment(&self, form: &PaymentForm) -> FormState<Payment> {
        let request = PaymentRequest {
            booking_id: form.booking_id.clone(),
            amount: form.amount,
            payment_method: form.payment_method.clone(),
        };

        if let Err(errors) = request.validate() {
            return FormState::error(schema::validation_message(
                &errors,
                &["booking_id", "amount"],
            ));
        }

        match self.payments.create(&request).await {
            Ok(payment) => FormState::success("Payment initiated.", payment),
            Err(e) => FormState::error(e.to_string()),
        }
    }

    /// Best-effort audit logging, detached from the submission so it never
    /// blocks or changes the user-visible outcome. Failures are warned about.
    fn audit<I, O>(&self, prediction_type: &str, input: &I, output: &O)
    where
        I: Serialize,
        O: Serialize,
    {
        let entry = NewPredictionLog {
            prediction_type: prediction_type.to_string(),
            input_payload: serde_json::to_string(input).unwrap_or_default(),
            output_payload: serde_json::to_string(output).unwrap_or_default(),
            confidence_score: None,
        };

        let predictions = self.predictions.clone();
        tokio::spawn(async move {
            if let Err(e) = predictions.log(&entry).await {
                tracing::warn!(
                    prediction_type = %entry.prediction_type,
                    error = %e,
                    "Prediction audit log failed"
                );
            }
        });
    }
}
