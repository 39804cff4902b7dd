// SPDX-License-Identifier: MIT

//! Payment write path.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::payment::{Payment, PaymentRequest};

/// Fixed user-facing message when the payment write path fails.
const PAYMENT_FAILED: &str = "Could not initiate payment.";

#[derive(Clone)]
pub struct PaymentService {
    api: ApiClient,
}

impl PaymentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Create a payment record. A failed mutation must be visible, so this
    /// errors instead of degrading.
    pub async fn create(&self, payment: &PaymentRequest) -> Result<Payment, ApiError> {
        let value = self
            .api
            .post_value("/payments", payment)
            .await
            .map_err(|e| {
                tracing::error!(booking_id = %payment.booking_id, error = %e, "Failed to create payment");
                ApiError::Unavailable(PAYMENT_FAILED.to_string())
            })?;

        serde_json::from_value(value)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid payment response: {}", e)))
    }
}
