//! Provides access to the external ordered-list store.
//!
//! The `ListStore` trait is the only surface the dispatcher sees; `redis_store`
//! implements it against a Redis server. An in-memory implementation backs the unit tests.

#[cfg(test)]
mod memory;
mod redis_store;

#[cfg(test)]
pub use memory::*;
pub use redis_store::*;

use crate::error::Result;
use async_trait::async_trait;

/// Key holding the registry of known list names.
pub const REGISTRY_KEY: &str = "ListNames";

/// Key holding the application identity chosen on first run.
pub const APP_NAME_KEY: &str = "AppName";

/// Stateless pass-through to a key-ordered list store.
///
/// Every operation is a single round-trip and fails with `AppError::Store`
/// when the backing connection is down.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Adds `value` at the tail of `list`. Returns the new length.
    async fn append(&self, list: &str, value: &str) -> Result<usize>;

    /// Adds `value` at the head of the registry. Returns the new registry length.
    async fn prepend_registry_entry(&self, value: &str) -> Result<usize>;

    /// Full contents of `list` in stored order.
    async fn range(&self, list: &str) -> Result<Vec<String>>;

    async fn length(&self, list: &str) -> Result<usize>;

    async fn index_at(&self, list: &str, index: usize) -> Result<Option<String>>;

    /// Zero-based position of the first occurrence of `value`.
    async fn position_of(&self, list: &str, value: &str) -> Result<Option<usize>>;

    /// Removes every occurrence of `value`. Returns how many were removed.
    async fn remove_all_occurrences(&self, list: &str, value: &str) -> Result<usize>;

    /// Deletes `key`. Returns true if something existed to delete.
    async fn delete_key(&self, key: &str) -> Result<bool>;

    async fn exists(&self, key: &str) -> Result<bool>;

    async fn get_value(&self, key: &str) -> Result<Option<String>>;

    async fn set_value(&self, key: &str, value: &str) -> Result<()>;

    /// Destroys all stored state.
    async fn flush(&self) -> Result<()>;
}
