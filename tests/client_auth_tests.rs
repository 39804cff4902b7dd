// SPDX-License-Identifier: MIT

//! Bearer attachment and global 401 handling.

mod common;

use common::{ride_json, test_api, user_json};
use ridepool::schema::ListFetch;
use wiremock::matchers::{bearer_token, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());
    api.session.set_token("tok-1".to_string());

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(bearer_token("tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "Asha")))
        .expect(1)
        .mount(&server)
        .await;

    let me = api.auth.get_me().await;
    assert_eq!(me.map(|u| u.name), Some("Asha".to_string()));
}

#[tokio::test]
async fn test_request_goes_out_unauthenticated_without_token() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());

    // Would swallow the request if an Authorization header were sent.
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u1", "Asha")))
        .mount(&server)
        .await;

    assert!(api.auth.get_me().await.is_some());
}

#[tokio::test]
async fn test_401_clears_token_and_redirects_to_login() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());
    api.session.set_token("stale".to_string());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = api.rides.open_rides_with_drivers().await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Could not fetch open rides."
    );
    assert_eq!(api.session.token(), None);
    assert_eq!(api.session.take_redirect().as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_401_handled_regardless_of_fetcher() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());
    api.session.set_token("stale".to_string());

    Mock::given(method("GET"))
        .and(path("/cars/owner/u1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let cars = api.cars.cars_by_owner("u1").await;

    assert_eq!(cars, ListFetch::Unavailable);
    assert_eq!(api.session.token(), None);
    assert_eq!(api.session.take_redirect().as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_non_401_error_keeps_session() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());
    api.session.set_token("tok-1".to_string());

    Mock::given(method("GET"))
        .and(path("/rides/r1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = api.rides.ride_by_id("r1").await;

    assert!(result.is_err());
    assert_eq!(api.session.token(), Some("tok-1".to_string()));
    assert_eq!(api.session.take_redirect(), None);
}

#[tokio::test]
async fn test_driver_enrichment_uses_session_token() {
    let server = MockServer::start().await;
    let api = test_api(&server.uri());
    api.session.set_token("tok-2".to_string());

    Mock::given(method("GET"))
        .and(path("/rides/open"))
        .and(bearer_token("tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![ride_json("r1", "d1")]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/d1"))
        .and(bearer_token("tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("d1", "Ravi")))
        .mount(&server)
        .await;

    let rides = api.rides.open_rides_with_drivers().await.unwrap();
    assert_eq!(rides.len(), 1);
}
