// SPDX-License-Identifier: MIT

//! Booking model and the derived ride-history row.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A booking row from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub ride_id: String,
    pub rider_id: String,
    /// Free-form status string from the backend: confirmed, completed,
    /// cancelled, failed, pending, upcoming.
    pub status: String,
    pub fare_paid: f64,
    pub requested_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<String>,
}

/// One row of a rider's ride history: a booking flattened with its ride's
/// addresses and departure time. Derived for display, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RideHistoryEntry {
    pub booking_id: String,
    pub pickup_location: String,
    pub destination: String,
    pub departure_time: String,
    pub fare_paid: f64,
    pub status: String,
}
