//! # IndexedDB cache backend — browser-side persistence
//!
//! [`IdbStore`] is the [`CacheStore`] implementation used on the **web
//! platform**. It persists cache slots into the browser's IndexedDB via the
//! [`rexie`] crate (a Rust wrapper around the IndexedDB API): a single
//! database named `"user-manager"` (version 1) with one `"cache"` object
//! store mapping slot keys to JSON strings.
//!
//! ## Connection management
//!
//! `IdbStore` is a zero-size struct that opens a fresh [`Rexie`] connection
//! on every operation. This is intentional: `Rexie` does not implement
//! `Clone`, and reopening is cheap because the browser caches IndexedDB
//! connections internally.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A corrupted or unavailable IndexedDB degrades
//! to "no cached data", and the list view falls back to fetching from the
//! remote API.

use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

use crate::cache::CacheStore;

const DB_NAME: &str = "user-manager";
const DB_VERSION: u32 = 1;
const CACHE_STORE: &str = "cache";

/// IndexedDB-backed CacheStore for the web platform.
#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(CACHE_STORE))
            .build()
            .await
    }
}

impl CacheStore for IdbStore {
    async fn read(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[CACHE_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(CACHE_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()?;

        let js_val = value?;
        serde_wasm_bindgen::from_value(js_val).ok()
    }

    async fn write(&self, key: &str, value: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[CACHE_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(CACHE_STORE) else {
            return;
        };

        let js_val = serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL);
        let _ = store.put(&js_val, Some(&JsValue::from_str(key))).await;
        let _ = tx.done().await;
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[CACHE_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(CACHE_STORE) else {
            return;
        };

        let _ = store.delete(JsValue::from_str(key)).await;
        let _ = tx.done().await;
    }
}
