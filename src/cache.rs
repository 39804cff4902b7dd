// SPDX-License-Identifier: MIT

//! Process-lifetime cache of user identity lookups.
//!
//! Injected into the user directory rather than living as a module-global
//! map: entries expire after a TTL (checked on read) and the cache is
//! capacity-bounded with oldest-first eviction.

use crate::models::user::UserRecord;
use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedUser {
    record: UserRecord,
    cached_at: Instant,
}

/// Bounded, TTL-expiring cache keyed by user id.
///
/// Unresolved lookups are cached too, so a missing user is not re-fetched
/// for every item of a fan-out.
#[derive(Debug)]
pub struct UserCache {
    entries: DashMap<String, CachedUser>,
    capacity: usize,
    ttl: Duration,
}

impl UserCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Look up a cached record, removing it first if older than the TTL.
    pub fn get(&self, user_id: &str) -> Option<UserRecord> {
        let fresh = match self.entries.get(user_id) {
            Some(entry) if entry.cached_at.elapsed() < self.ttl => Some(entry.record.clone()),
            Some(_) => None,
            None => return None,
        };

        if fresh.is_none() {
            self.entries.remove(user_id);
        }
        fresh
    }

    /// Insert a record, evicting the oldest entry when at capacity.
    pub fn insert(&self, user_id: String, record: UserRecord) {
        if !self.entries.contains_key(&user_id) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.entries.insert(
            user_id,
            CachedUser {
                record,
                cached_at: Instant::now(),
            },
        );
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().cached_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
