// SPDX-License-Identifier: MIT

//! Ride model and its driver-enriched view.

use crate::models::user::PersonRef;
use crate::time_utils::epoch_seconds_to_iso8601;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A pickup or destination location.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    /// Present when the backend has geocoded the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
}

/// An offered ride as returned by the backend. Read-only in this layer;
/// rides are created and mutated elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    pub pickup_location: Location,
    pub destination: Location,
    /// Departure time, normalized to an ISO-8601 string. The backend sends
    /// either a string or a `{seconds, nanos}` pair.
    #[serde(deserialize_with = "deserialize_departure_time")]
    pub departure_time: String,
    pub fare_per_seat: f64,
    pub driver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ladies_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

/// Wire representations of a departure time. A `nanos` field may accompany
/// `seconds`; sub-second precision is dropped during normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum DepartureTimeRepr {
    Iso(String),
    Epoch { seconds: i64 },
}

fn deserialize_departure_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match DepartureTimeRepr::deserialize(deserializer)? {
        DepartureTimeRepr::Iso(s) => Ok(s),
        DepartureTimeRepr::Epoch { seconds } => Ok(epoch_seconds_to_iso8601(seconds)),
    }
}

/// An open ride with its driver's identity attached by the enrichment pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RideWithDriver {
    #[serde(flatten)]
    pub ride: Ride,
    pub driver: PersonRef,
}
