use std::time::Duration;

use crate::models::{ListingKey, SavedSet};

/// Session-scoped saved-set store.
///
/// Each session id maps to its own SavedSet, created empty on first use and
/// evicted when the TTL expires — the session lifecycle. There is exactly
/// one writer per session (the session's own requests), so a read-toggle-
/// write cycle needs no further coordination.
pub struct SessionStore {
    sets: moka::future::Cache<String, SavedSet>,
}

impl SessionStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let sets = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { sets }
    }

    /// The session's saved set, empty for a fresh session
    pub async fn saved(&self, session_id: &str) -> SavedSet {
        self.sets.get(session_id).await.unwrap_or_default()
    }

    /// Toggle a listing in the session's set and store the result.
    ///
    /// Returns the new set; toggling the same key again restores the old
    /// one.
    pub async fn toggle(&self, session_id: &str, key: ListingKey) -> SavedSet {
        let updated = self.saved(session_id).await.toggle(key);
        self.sets.insert(session_id.to_string(), updated.clone()).await;
        updated
    }

    /// Drop a session's saved set before its TTL runs out
    pub async fn clear(&self, session_id: &str) {
        self.sets.invalidate(session_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_session_is_empty() {
        let store = SessionStore::new(100, 60);
        assert!(store.saved("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_original() {
        let store = SessionStore::new(100, 60);
        let key = ListingKey::property(7);

        let once = store.toggle("s1", key).await;
        assert!(once.contains(&key));

        let twice = store.toggle("s1", key).await;
        assert!(twice.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(100, 60);
        let key = ListingKey::job(3);

        store.toggle("s1", key).await;

        assert!(store.saved("s1").await.contains(&key));
        assert!(store.saved("s2").await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_discards_the_set() {
        let store = SessionStore::new(100, 60);
        store.toggle("s1", ListingKey::property(1)).await;

        store.clear("s1").await;

        assert!(store.saved("s1").await.is_empty());
    }
}
