// SPDX-License-Identifier: MIT

//! Booking fetchers and the ride-history composer.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::booking::{Booking, RideHistoryEntry};
use crate::schema::{self, ListFetch};
use crate::services::rides::RideService;
use futures_util::future::join_all;

/// Fixed user-facing message when the ride-history read path fails.
const RIDE_HISTORY_UNAVAILABLE: &str = "Could not fetch ride history.";

#[derive(Clone)]
pub struct BookingService {
    api: ApiClient,
    rides: RideService,
}

impl BookingService {
    pub fn new(api: ApiClient, rides: RideService) -> Self {
        Self { api, rides }
    }

    /// Fetch a rider's bookings.
    pub async fn bookings_by_rider(&self, rider_id: &str) -> ListFetch<Booking> {
        let path = format!("/bookings/rider/{}", urlencoding::encode(rider_id));
        match self.api.get_value(&path).await {
            Ok(value) => schema::decode_list("booking", value),
            Err(e) => {
                tracing::error!(rider_id, error = %e, "Failed to fetch bookings");
                ListFetch::Unavailable
            }
        }
    }

    /// Fetch a rider's bookings and flatten each with its ride's addresses
    /// and departure time.
    ///
    /// Ride fetches fan out concurrently. A booking whose ride cannot be
    /// fetched is dropped from the history; the rest still appear, in the
    /// order the backend returned the bookings.
    pub async fn ride_history(&self, rider_id: &str) -> Result<Vec<RideHistoryEntry>, ApiError> {
        let bookings = match self.bookings_by_rider(rider_id).await {
            ListFetch::Complete(bookings) => bookings,
            ListFetch::Malformed => return Ok(Vec::new()),
            ListFetch::Unavailable => {
                return Err(ApiError::Unavailable(RIDE_HISTORY_UNAVAILABLE.to_string()))
            }
        };

        let entries = join_all(bookings.into_iter().map(|booking| {
            let rides = self.rides.clone();
            async move {
                match rides.ride_by_id(&booking.ride_id).await {
                    Ok(Some(ride)) => Some(RideHistoryEntry {
                        booking_id: booking.id,
                        pickup_location: ride.pickup_location.address,
                        destination: ride.destination.address,
                        departure_time: ride.departure_time,
                        fare_paid: booking.fare_paid,
                        status: booking.status,
                    }),
                    Ok(None) => None,
                    Err(e) => {
                        tracing::error!(
                            ride_id = %booking.ride_id,
                            error = %e,
                            "Failed to fetch ride details for booking"
                        );
                        None
                    }
                }
            }
        }))
        .await;

        Ok(entries.into_iter().flatten().collect())
    }
}
