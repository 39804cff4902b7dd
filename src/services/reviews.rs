// SPDX-License-Identifier: MIT

//! Review fetchers and the reviewer-enrichment composer.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::review::{Review, ReviewDto};
use crate::schema::{self, ListFetch};
use crate::services::users::UserDirectory;
use futures_util::future::join_all;

/// Fixed user-facing message when the reviews read path fails.
const REVIEWS_UNAVAILABLE: &str = "Could not fetch user reviews.";

#[derive(Clone)]
pub struct ReviewService {
    api: ApiClient,
    users: UserDirectory,
}

impl ReviewService {
    pub fn new(api: ApiClient, users: UserDirectory) -> Self {
        Self { api, users }
    }

    /// Fetch the reviews left for a user, with the reviewer still a bare id.
    pub async fn reviews_by_reviewee(&self, user_id: &str) -> ListFetch<ReviewDto> {
        let path = format!("/reviews/reviewee/{}", urlencoding::encode(user_id));
        match self.api.get_value(&path).await {
            Ok(value) => schema::decode_list("review", value),
            Err(e) => {
                tracing::error!(user_id, error = %e, "Failed to fetch reviews");
                ListFetch::Unavailable
            }
        }
    }

    /// Fetch the reviews left for a user and attach each reviewer's identity.
    ///
    /// Reviewer lookups fan out concurrently; a review whose lookup errors
    /// is dropped, the rest keep the backend's order.
    pub async fn reviews_for_user(&self, user_id: &str) -> Result<Vec<Review>, ApiError> {
        let dtos = match self.reviews_by_reviewee(user_id).await {
            ListFetch::Complete(dtos) => dtos,
            ListFetch::Malformed => return Ok(Vec::new()),
            ListFetch::Unavailable => {
                return Err(ApiError::Unavailable(REVIEWS_UNAVAILABLE.to_string()))
            }
        };

        let enriched = join_all(dtos.into_iter().map(|dto| {
            let users = self.users.clone();
            async move {
                match users.lookup(&dto.reviewer_id).await {
                    Ok(record) => Some(Review::enrich(dto, record.into())),
                    Err(e) => {
                        tracing::error!(review_id = %dto.id, error = %e, "Failed to fetch reviewer details");
                        None
                    }
                }
            }
        }))
        .await;

        Ok(enriched.into_iter().flatten().collect())
    }
}
