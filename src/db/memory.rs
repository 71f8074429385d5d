//! In-memory `ListStore` used by the dispatcher and resolver tests.

use super::{ListStore, REGISTRY_KEY};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct MemoryState {
    lists: HashMap<String, VecDeque<String>>,
    values: HashMap<String, String>,
}

/// Mirrors the Redis semantics the dispatcher relies on: empty lists cease to exist.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store whose registry reads in the given order.
    pub fn with_registry(names: &[&str]) -> Self {
        let store = Self::new();
        store.seed(REGISTRY_KEY, names);
        store
    }

    pub fn seed(&self, list: &str, values: &[&str]) {
        if values.is_empty() {
            return;
        }
        let mut state = self.state.lock().unwrap();
        let entry = state.lists.entry(list.to_string()).or_default();
        entry.extend(values.iter().map(|v| v.to_string()));
    }

    pub fn snapshot(&self, list: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .lists
            .get(list)
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Makes every subsequent call fail as if the server went away.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn state(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>> {
        if self.offline.load(Ordering::SeqCst) {
            let err = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
            return Err(AppError::from(err));
        }
        Ok(self.state.lock().unwrap())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn append(&self, list: &str, value: &str) -> Result<usize> {
        let mut state = self.state()?;
        let entry = state.lists.entry(list.to_string()).or_default();
        entry.push_back(value.to_string());
        Ok(entry.len())
    }

    async fn prepend_registry_entry(&self, value: &str) -> Result<usize> {
        let mut state = self.state()?;
        let entry = state.lists.entry(REGISTRY_KEY.to_string()).or_default();
        entry.push_front(value.to_string());
        Ok(entry.len())
    }

    async fn range(&self, list: &str) -> Result<Vec<String>> {
        let state = self.state()?;
        Ok(state
            .lists
            .get(list)
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn length(&self, list: &str) -> Result<usize> {
        let state = self.state()?;
        Ok(state.lists.get(list).map_or(0, |l| l.len()))
    }

    async fn index_at(&self, list: &str, index: usize) -> Result<Option<String>> {
        let state = self.state()?;
        Ok(state.lists.get(list).and_then(|l| l.get(index).cloned()))
    }

    async fn position_of(&self, list: &str, value: &str) -> Result<Option<usize>> {
        let state = self.state()?;
        Ok(state
            .lists
            .get(list)
            .and_then(|l| l.iter().position(|v| v == value)))
    }

    async fn remove_all_occurrences(&self, list: &str, value: &str) -> Result<usize> {
        let mut state = self.state()?;
        let Some(entry) = state.lists.get_mut(list) else {
            return Ok(0);
        };
        let before = entry.len();
        entry.retain(|v| v != value);
        let removed = before - entry.len();
        if entry.is_empty() {
            state.lists.remove(list);
        }
        Ok(removed)
    }

    async fn delete_key(&self, key: &str) -> Result<bool> {
        let mut state = self.state()?;
        let had_list = state.lists.remove(key).is_some();
        let had_value = state.values.remove(key).is_some();
        Ok(had_list || had_value)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let state = self.state()?;
        Ok(state.lists.contains_key(key) || state.values.contains_key(key))
    }

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let state = self.state()?;
        Ok(state.values.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state()?;
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        let mut state = self.state()?;
        *state = MemoryState::default();
        Ok(())
    }
}
