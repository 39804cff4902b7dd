// SPDX-License-Identifier: MIT

//! Car fetcher for driver dashboards.

use crate::client::ApiClient;
use crate::models::car::Car;
use crate::schema::{self, ListFetch};

#[derive(Clone)]
pub struct CarService {
    api: ApiClient,
}

impl CarService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the cars registered by an owner.
    pub async fn cars_by_owner(&self, owner_id: &str) -> ListFetch<Car> {
        let path = format!("/cars/owner/{}", urlencoding::encode(owner_id));
        match self.api.get_value(&path).await {
            Ok(value) => schema::decode_list("car", value),
            Err(e) => {
                tracing::error!(owner_id, error = %e, "Failed to fetch cars");
                ListFetch::Unavailable
            }
        }
    }
}
