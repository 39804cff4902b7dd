// SPDX-License-Identifier: MIT

//! RidePool client layer: typed fetchers, enrichment and form actions for a
//! carpooling backend.
//!
//! This crate is the data layer a UI host drives. It validates every payload
//! crossing the network boundary, joins related resources with concurrent
//! fan-out, and converts form submissions into tri-state results. The AI
//! flows behind the helper features are external collaborators reached
//! through the traits in [`ai`].

pub mod actions;
pub mod ai;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod services;
pub mod session;
pub mod time_utils;

use actions::ActionHandlers;
use ai::{FareFlow, MeetingPointFlow};
use cache::UserCache;
use client::ApiClient;
use config::Config;
use services::{
    AuthService, BookingService, CarService, FuelPriceService, PaymentService,
    PredictionLogService, ReviewService, RideService, UserDirectory,
};
use session::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The full client layer, wired together.
pub struct RidePoolApi {
    pub session: Arc<SessionStore>,
    pub auth: AuthService,
    pub users: UserDirectory,
    pub rides: RideService,
    pub bookings: BookingService,
    pub reviews: ReviewService,
    pub cars: CarService,
    pub fuel: FuelPriceService,
    pub payments: PaymentService,
    pub predictions: PredictionLogService,
}

impl RidePoolApi {
    /// Wire the client layer from configuration.
    pub fn new(config: &Config) -> Self {
        let session = Arc::new(SessionStore::new());
        let api = ApiClient::new(config, session.clone());
        let cache = Arc::new(UserCache::new(
            config.user_cache_capacity,
            Duration::from_secs(config.user_cache_ttl_secs),
        ));

        let users = UserDirectory::new(api.clone(), cache);
        let rides = RideService::new(api.clone(), users.clone());

        Self {
            auth: AuthService::new(api.clone(), session.clone()),
            bookings: BookingService::new(api.clone(), rides.clone()),
            reviews: ReviewService::new(api.clone(), users.clone()),
            cars: CarService::new(api.clone()),
            fuel: FuelPriceService::new(api.clone()),
            payments: PaymentService::new(api.clone()),
            predictions: PredictionLogService::new(api),
            users,
            rides,
            session,
        }
    }

    /// Action handlers bound to the given AI flows.
    pub fn actions(
        &self,
        meeting_flow: Arc<dyn MeetingPointFlow>,
        fare_flow: Arc<dyn FareFlow>,
    ) -> ActionHandlers {
        ActionHandlers::new(
            meeting_flow,
            fare_flow,
            self.predictions.clone(),
            self.payments.clone(),
        )
    }
}

/// Initialize structured JSON logging for hosts that want it.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ridepool=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
