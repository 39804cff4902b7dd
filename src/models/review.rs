// SPDX-License-Identifier: MIT

//! Review models: the backend row and the reviewer-enriched view.

use crate::models::user::PersonRef;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A review as the backend returns it, with the reviewer still a bare id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub reviewer_id: String,
    pub reviewee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ride_id: Option<String>,
    /// Star rating on the 1-5 scale.
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub review_text: String,
    pub timestamp: String,
}

/// A review with its reviewer's identity attached by the enrichment pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub reviewer: PersonRef,
    pub reviewee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_id: Option<String>,
    pub rating: u8,
    pub review_text: String,
    pub timestamp: String,
}

impl Review {
    /// Attach a resolved reviewer to a backend review row.
    pub fn enrich(dto: ReviewDto, reviewer: PersonRef) -> Self {
        Self {
            id: dto.id,
            reviewer,
            reviewee_id: dto.reviewee_id,
            ride_id: dto.ride_id,
            rating: dto.rating,
            review_text: dto.review_text,
            timestamp: dto.timestamp,
        }
    }
}
