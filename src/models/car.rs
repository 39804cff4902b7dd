// SPDX-License-Identifier: MIT

//! Car model for driver dashboards.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Optional feature flags on a car.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ladies_only: Option<bool>,
}

/// A car registered by a driver.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub owner_id: String,
    pub model: String,
    pub registration_number: String,
    pub fuel_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_kmpl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_proof: Option<Vec<String>>,
    pub seating_capacity: u32,
    pub year: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<CarFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}
