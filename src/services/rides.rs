// SPDX-License-Identifier: MIT

//! Ride fetchers and the driver-enrichment composer.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::ride::{Ride, RideWithDriver};
use crate::schema::{self, ListFetch};
use crate::services::users::UserDirectory;
use futures_util::future::join_all;

/// Fixed user-facing message when the open-rides read path fails.
const OPEN_RIDES_UNAVAILABLE: &str = "Could not fetch open rides.";

#[derive(Clone)]
pub struct RideService {
    api: ApiClient,
    users: UserDirectory,
}

impl RideService {
    pub fn new(api: ApiClient, users: UserDirectory) -> Self {
        Self { api, users }
    }

    /// Fetch a single ride.
    ///
    /// A payload that fails validation reads as "not found"; a transport or
    /// backend failure surfaces as a fixed user-facing error.
    pub async fn ride_by_id(&self, ride_id: &str) -> Result<Option<Ride>, ApiError> {
        let path = format!("/rides/{}", urlencoding::encode(ride_id));
        let value = match self.api.get_value(&path).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(ride_id, error = %e, "Failed to fetch ride");
                return Err(ApiError::Unavailable(format!(
                    "Could not fetch ride {}.",
                    ride_id
                )));
            }
        };
        Ok(schema::decode_entity("ride", value))
    }

    /// Fetch all open rides, without enrichment.
    pub async fn open_rides(&self) -> ListFetch<Ride> {
        match self.api.get_value("/rides/open").await {
            Ok(value) => schema::decode_list("ride", value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch open rides");
                ListFetch::Unavailable
            }
        }
    }

    /// Fetch all open rides and attach each driver's identity.
    ///
    /// Driver lookups fan out concurrently; the output keeps the backend's
    /// ride order. A ride whose lookup errors is dropped rather than
    /// failing the whole listing; a driver that simply doesn't resolve
    /// stays attached as unresolved.
    pub async fn open_rides_with_drivers(&self) -> Result<Vec<RideWithDriver>, ApiError> {
        let rides = match self.open_rides().await {
            ListFetch::Complete(rides) => rides,
            ListFetch::Malformed => return Ok(Vec::new()),
            ListFetch::Unavailable => {
                return Err(ApiError::Unavailable(OPEN_RIDES_UNAVAILABLE.to_string()))
            }
        };

        let enriched = join_all(rides.into_iter().map(|ride| {
            let users = self.users.clone();
            async move {
                match users.lookup(&ride.driver_id).await {
                    Ok(record) => Some(RideWithDriver {
                        driver: record.into(),
                        ride,
                    }),
                    Err(e) => {
                        tracing::error!(ride_id = %ride.id, error = %e, "Failed to fetch driver details");
                        None
                    }
                }
            }
        }))
        .await;

        Ok(enriched.into_iter().flatten().collect())
    }
}
