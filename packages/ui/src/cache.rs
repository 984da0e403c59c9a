//! Shared cache constructor for all platforms.
//!
//! Returns a [`store::UserCache`] backed by the appropriate
//! [`store::CacheStore`]:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Native** (tests, tooling): process-local [`store::MemoryStore`]

/// Create a platform-appropriate user cache.
pub fn make_cache() -> store::UserCache<impl store::CacheStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::UserCache::new(store::IdbStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::UserCache::new(store::MemoryStore::new())
    }
}
