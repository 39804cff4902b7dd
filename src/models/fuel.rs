// SPDX-License-Identifier: MIT

//! Fuel price reference data.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fuel type accepted by the fuel-price endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
}

impl FuelType {
    /// Wire value used as the `fuelType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
        }
    }
}

/// Reference fuel price row, fetched on demand by the fare-prediction tool.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelPriceRecord {
    pub id: String,
    pub city: String,
    pub fuel_type: String,
    pub price_per_litre: f64,
    pub api_source: String,
    pub timestamp: String,
}
