//! Single-slot persistence for the last-known full user list.
//!
//! [`CacheStore`] is the key/value seam between the app and the browser's
//! storage: absence is explicit (`Option`), and backends degrade to "absent"
//! rather than failing. [`UserCache`] layers the users slot on top, wrapping
//! the list in a versioned JSON envelope so a later format change reads old
//! blobs as a cold start instead of garbage.

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;

const USERS_KEY: &str = "users";
const CACHE_VERSION: u32 = 1;

/// Key/value persistence behind the user-list cache.
pub trait CacheStore {
    async fn read(&self, key: &str) -> Option<String>;
    async fn write(&self, key: &str, value: &str);
    async fn remove(&self, key: &str);
}

#[derive(Serialize, Deserialize)]
struct CacheEnvelope {
    version: u32,
    users: Vec<UserRecord>,
}

/// The cache slot holding the serialized user list.
#[derive(Clone, Debug)]
pub struct UserCache<S: CacheStore> {
    store: S,
}

impl<S: CacheStore> UserCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The cached list, or `None` when the slot is absent, unparseable or
    /// written by a different format version.
    pub async fn load(&self) -> Option<Vec<UserRecord>> {
        let raw = self.store.read(USERS_KEY).await?;
        let envelope: CacheEnvelope = serde_json::from_str(&raw).ok()?;
        (envelope.version == CACHE_VERSION).then_some(envelope.users)
    }

    /// Overwrite the slot wholesale with the given list.
    pub async fn save(&self, users: &[UserRecord]) {
        let envelope = CacheEnvelope {
            version: CACHE_VERSION,
            users: users.to_vec(),
        };
        if let Ok(raw) = serde_json::to_string(&envelope) {
            self.store.write(USERS_KEY, &raw).await;
        }
    }

    pub async fn clear(&self) {
        self.store.remove(USERS_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn record(id: u64, name: &str, username: &str, email: &str) -> UserRecord {
        UserRecord {
            id: Some(id),
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn cold_start_reads_none() {
        let cache = UserCache::new(MemoryStore::new());
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let cache = UserCache::new(MemoryStore::new());
        let users = vec![record(1, "A", "a", "a@x.com")];

        cache.save(&users).await;

        assert_eq!(cache.load().await, Some(users));
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let cache = UserCache::new(MemoryStore::new());
        cache.save(&[record(1, "A", "a", "a@x.com")]).await;

        let replacement = vec![
            record(99, "X", "x", "x@x.com"),
            record(1, "A", "a", "a@x.com"),
        ];
        cache.save(&replacement).await;

        assert_eq!(cache.load().await, Some(replacement));
    }

    #[tokio::test]
    async fn version_mismatch_reads_as_absent() {
        let store = MemoryStore::new();
        store
            .write(USERS_KEY, r#"{"version":99,"users":[]}"#)
            .await;

        let cache = UserCache::new(store);
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn garbage_reads_as_absent() {
        let store = MemoryStore::new();
        store.write(USERS_KEY, "not json at all").await;

        let cache = UserCache::new(store);
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn clear_empties_the_slot() {
        let cache = UserCache::new(MemoryStore::new());
        cache.save(&[record(1, "A", "a", "a@x.com")]).await;

        cache.clear().await;

        assert!(cache.load().await.is_none());
    }
}
