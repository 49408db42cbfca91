use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

use crate::keygen::generate_key;

/// Size at which the store is wiped when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("URL already exists")]
    DuplicateUrl,
}

/// Thread-safe in-memory store mapping short key -> destination URL.
///
/// Every operation holds one exclusive lock for its whole duration, so the
/// capacity check, duplicate check and insert inside `put` happen as a single
/// step. Reads are serialized with writes; there is no reader/writer split.
///
/// Capacity is enforced by clearing the entire map once it holds `capacity`
/// entries, never by evicting individual links.
#[derive(Clone, Debug)]
pub struct UrlStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
    capacity: usize,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store `url` and return its short key.
    ///
    /// A full store is emptied first. Submitting a URL that is already stored
    /// fails without touching the map.
    pub async fn put(&self, url: &str) -> Result<String, StoreError> {
        let mut urls = self.inner.lock().await;

        if urls.len() >= self.capacity {
            tracing::info!(
                "Store reached capacity ({}), clearing all {} link(s)",
                self.capacity,
                urls.len()
            );
            urls.clear();
        }

        let key = generate_key(url);

        // Each URL only ever lives under its own key, so this is the same as
        // scanning every stored value.
        if urls.get(&key).is_some_and(|existing| existing == url) {
            return Err(StoreError::DuplicateUrl);
        }

        // A different URL under the same key is silently replaced.
        urls.insert(key.clone(), url.to_owned());
        Ok(key)
    }

    /// Look up a key. Returns a clone of the destination URL if present.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Remove every entry.
    #[allow(dead_code)]
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    /// Number of entries currently stored.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}
