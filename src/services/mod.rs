// Service exports
pub mod catalog;
pub mod sessions;
pub mod store;

pub use catalog::{CatalogClient, CatalogError};
pub use sessions::{SessionError, SessionKey, SessionStore};
pub use store::{JsonStoreExt, KeyValueStore, MemoryStore, StoreError};
