// SPDX-License-Identifier: MIT

//! Entity fetchers and enrichment composers over the backend API.
//!
//! Read paths degrade (empty list, absent entity, dropped item) so one bad
//! record never hides an otherwise-valid page; write paths surface their
//! failures. See each service for the exact policy.

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod fuel;
pub mod payments;
pub mod predictions;
pub mod reviews;
pub mod rides;
pub mod users;

pub use auth::AuthService;
pub use bookings::BookingService;
pub use cars::CarService;
pub use fuel::FuelPriceService;
pub use payments::PaymentService;
pub use predictions::PredictionLogService;
pub use reviews::ReviewService;
pub use rides::RideService;
pub use users::UserDirectory;
