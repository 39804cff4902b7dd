// SPDX-License-Identifier: MIT

use ridepool::config::Config;
use ridepool::RidePoolApi;
use serde_json::{json, Value};

/// Build the client layer against a test server.
#[allow(dead_code)]
pub fn test_api(base_url: &str) -> RidePoolApi {
    let config = Config {
        api_base_url: base_url.to_string(),
        ..Config::default()
    };
    RidePoolApi::new(&config)
}

/// A well-formed ride payload.
#[allow(dead_code)]
pub fn ride_json(id: &str, driver_id: &str) -> Value {
    json!({
        "id": id,
        "pickupLocation": {"address": format!("{} pickup", id)},
        "destination": {"address": format!("{} destination", id)},
        "departureTime": "2026-03-01T08:30:00Z",
        "farePerSeat": 240.0,
        "driverId": driver_id
    })
}

/// A well-formed booking payload.
#[allow(dead_code)]
pub fn booking_json(id: &str, ride_id: &str, rider_id: &str) -> Value {
    json!({
        "id": id,
        "rideId": ride_id,
        "riderId": rider_id,
        "status": "confirmed",
        "farePaid": 240.0,
        "requestedAt": "2026-02-20T10:00:00Z"
    })
}

/// A well-formed public user payload.
#[allow(dead_code)]
pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "profilePhotoUrl": format!("https://cdn.example.com/{}.jpg", id)
    })
}

/// A well-formed review payload.
#[allow(dead_code)]
pub fn review_json(id: &str, reviewer_id: &str, reviewee_id: &str, rating: u8) -> Value {
    json!({
        "id": id,
        "reviewerId": reviewer_id,
        "revieweeId": reviewee_id,
        "rating": rating,
        "reviewText": "Smooth ride, on time.",
        "timestamp": "2026-02-21T18:00:00Z"
    })
}
