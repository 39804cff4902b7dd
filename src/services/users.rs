// SPDX-License-Identifier: MIT

//! User directory: profile lookups backed by the injected identity cache.

use crate::cache::UserCache;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::user::{UserPublic, UserRecord};
use crate::schema;
use std::sync::Arc;

/// Resolves user ids to public profiles for the enrichment composers.
#[derive(Clone)]
pub struct UserDirectory {
    api: ApiClient,
    cache: Arc<UserCache>,
}

impl UserDirectory {
    pub fn new(api: ApiClient, cache: Arc<UserCache>) -> Self {
        Self { api, cache }
    }

    /// Resolve a user id to a profile, consulting the cache first.
    ///
    /// A missing (404) or malformed profile resolves to
    /// [`UserRecord::Unresolved`] and is cached as such; only transport and
    /// backend failures error, which enrichment callers treat as "drop the
    /// item".
    pub async fn lookup(&self, user_id: &str) -> Result<UserRecord, ApiError> {
        if let Some(record) = self.cache.get(user_id) {
            tracing::debug!(user_id, "User cache hit");
            return Ok(record);
        }

        let path = format!("/users/{}", urlencoding::encode(user_id));
        let record = match self.api.get_value(&path).await {
            Ok(value) => match schema::decode_entity::<UserPublic>("user", value) {
                Some(user) => UserRecord::Profile(user),
                None => UserRecord::Unresolved {
                    id: user_id.to_string(),
                },
            },
            Err(e) if e.is_not_found() => UserRecord::Unresolved {
                id: user_id.to_string(),
            },
            Err(e) => return Err(e),
        };

        self.cache.insert(user_id.to_string(), record.clone());
        Ok(record)
    }
}
