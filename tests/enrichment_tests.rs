// SPDX-License-Identifier: MIT

//! Driver and reviewer enrichment: fan-out, drop semantics, cache use.

mod common;

use common::{review_json, ride_json, test_api, user_json};
use ridepool::models::user::PersonRef;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_ride_with_failed_driver_lookup_is_dropped() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            ride_json("r1", "d1"),
            ride_json("r2", "d2"),
        ]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("d1", "Ravi")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/d2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let rides = api.rides.open_rides_with_drivers().await.unwrap();

    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].ride.id, "r1");
    assert_eq!(
        rides[0].driver,
        PersonRef::Known {
            name: "Ravi".to_string(),
            profile_photo_url: Some("https://cdn.example.com/d1.jpg".to_string()),
        }
    );
}

#[tokio::test]
async fn test_missing_driver_profile_stays_unresolved() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![ride_json("r1", "ghost")]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let rides = api.rides.open_rides_with_drivers().await.unwrap();

    assert_eq!(rides.len(), 1);
    assert_eq!(
        rides[0].driver,
        PersonRef::Unresolved {
            id: "ghost".to_string()
        }
    );
}

#[tokio::test]
async fn test_repeat_driver_lookup_is_served_from_cache() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![ride_json("r1", "d1")]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("d1", "Ravi")))
        .expect(1)
        .mount(&server)
        .await;

    // The second listing resolves the driver from the cache.
    let first = api.rides.open_rides_with_drivers().await.unwrap();
    let second = api.rides.open_rides_with_drivers().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[tokio::test]
async fn test_open_rides_malformed_payload_degrades_to_empty() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "r1"}])))
        .mount(&server)
        .await;

    let rides = api.rides.open_rides_with_drivers().await.unwrap();
    assert!(rides.is_empty());
}

#[tokio::test]
async fn test_reviews_enriched_with_reviewer_identity() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/reviews/reviewee/u9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            review_json("v1", "u1", "u9", 5),
            review_json("v2", "u2", "u9", 3),
        ]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "Asha")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/u2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let reviews = api.reviews.reviews_for_user("u9").await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, "v1");
    assert_eq!(reviews[0].rating, 5);
    assert_eq!(
        reviews[0].reviewer,
        PersonRef::Known {
            name: "Asha".to_string(),
            profile_photo_url: Some("https://cdn.example.com/u1.jpg".to_string()),
        }
    );
}

#[tokio::test]
async fn test_out_of_range_rating_degrades_review_list() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/reviews/reviewee/u9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            review_json("v1", "u1", "u9", 5),
            review_json("v2", "u2", "u9", 9),
        ]))
        .mount(&server)
        .await;

    let reviews = api.reviews.reviews_for_user("u9").await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_reviews_error_when_listing_unavailable() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    Mock::given(method("GET"))
        .and(path("/reviews/reviewee/u9"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = api.reviews.reviews_for_user("u9").await.unwrap_err();
    assert_eq!(err.to_string(), "Could not fetch user reviews.");
}
