// SPDX-License-Identifier: MIT

//! Fuel price fetcher, the tool behind the fare-prediction flow.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::fuel::{FuelPriceRecord, FuelType};
use crate::schema;

/// Fixed user-facing message when the fuel-price read path fails.
const FUEL_PRICES_UNAVAILABLE: &str = "Could not fetch fuel price data.";

#[derive(Clone)]
pub struct FuelPriceService {
    api: ApiClient,
}

impl FuelPriceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Latest fuel price rows for a city and fuel type.
    ///
    /// Transport failures error with a fixed message; a malformed payload
    /// degrades to an empty listing after logging.
    pub async fn latest(
        &self,
        city: &str,
        fuel_type: FuelType,
    ) -> Result<Vec<FuelPriceRecord>, ApiError> {
        let value = self
            .api
            .get_value_with_query(
                "/fuel-prices/latest",
                &[("city", city), ("fuelType", fuel_type.as_str())],
            )
            .await
            .map_err(|e| {
                tracing::error!(city, error = %e, "Failed to fetch fuel prices");
                ApiError::Unavailable(FUEL_PRICES_UNAVAILABLE.to_string())
            })?;

        Ok(schema::decode_list("fuel price", value).into_items())
    }
}
