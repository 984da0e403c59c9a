pub mod cache;
pub mod collection;
pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use cache::{CacheStore, UserCache};
pub use collection::{UserCollection, PAGE_SIZE};
pub use models::UserRecord;
