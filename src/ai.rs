// SPDX-License-Identifier: MIT

//! Boundary to the AI-assisted flows.
//!
//! The flows themselves (prompting, tool calls, model choice) live outside
//! this layer. The traits here are the seam the action handlers call
//! through; [`crate::services::FuelPriceService`] is the in-crate tool a
//! fare flow implementation uses for its fuel-price lookups.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fuel preference accepted by the fare flow.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelPreference {
    Petrol,
    Diesel,
    #[default]
    Any,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown fuel preference")]
pub struct UnknownFuelPreference;

impl FromStr for FuelPreference {
    type Err = UnknownFuelPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "petrol" => Ok(FuelPreference::Petrol),
            "diesel" => Ok(FuelPreference::Diesel),
            "any" => Ok(FuelPreference::Any),
            _ => Err(UnknownFuelPreference),
        }
    }
}

/// Input to the meeting-point flow: one location per carpool participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingPointInput {
    pub locations: Vec<String>,
}

/// Output of the meeting-point flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPointSuggestion {
    /// Suggested meeting point address.
    pub meeting_point: String,
    /// Why this point was chosen.
    pub justification: String,
}

/// Input to the fare-prediction flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FareEstimateInput {
    pub start_location: String,
    pub end_location: String,
    #[serde(default)]
    pub fuel_type: FuelPreference,
}

/// Output of the fare-prediction flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FareEstimate {
    pub predicted_total_cost: f64,
    /// Per-person fare, assuming a shared car.
    pub fare_per_person: f64,
}

/// Meeting-point optimizer flow.
#[async_trait::async_trait]
pub trait MeetingPointFlow: Send + Sync {
    async fn suggest(&self, input: &MeetingPointInput) -> anyhow::Result<MeetingPointSuggestion>;
}

/// Fare-prediction flow.
#[async_trait::async_trait]
pub trait FareFlow: Send + Sync {
    async fn predict(&self, input: &FareEstimateInput) -> anyhow::Result<FareEstimate>;
}
