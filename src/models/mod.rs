// SPDX-License-Identifier: MIT

//! Data transfer objects for the backend API.

pub mod booking;
pub mod car;
pub mod fuel;
pub mod payment;
pub mod prediction;
pub mod review;
pub mod ride;
pub mod user;

pub use booking::{Booking, RideHistoryEntry};
pub use car::{Car, CarFeatures};
pub use fuel::{FuelPriceRecord, FuelType};
pub use payment::{Payment, PaymentRequest};
pub use prediction::{NewPredictionLog, PredictionLog};
pub use review::{Review, ReviewDto};
pub use ride::{Location, Ride, RideWithDriver};
pub use user::{
    AuthResponse, Gender, LoginForm, PersonRef, RegisterForm, UserPublic, UserRecord, UserType,
};
