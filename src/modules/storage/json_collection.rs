use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use super::kv_store::{KeyValueStore, StorageError};

/// Shared handle over the key-value store.
///
/// Collections are read and written wholesale, so every read-modify-write
/// must happen while holding the guard returned by [`Storage::lock`].
pub struct Storage {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl Storage {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Typed view over the JSON array stored under `key`
    pub fn collection<T>(&self, key: &'static str) -> JsonCollection<T> {
        JsonCollection {
            kv: Arc::clone(&self.kv),
            key,
            _marker: PhantomData,
        }
    }

    /// Serialize writers across both collections
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

/// A JSON array blob persisted under a single key
pub struct JsonCollection<T> {
    kv: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load a snapshot of the collection.
    ///
    /// A missing key yields an empty list. A blob that fails to parse is
    /// also treated as empty, with a warning.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        let Some(raw) = self.kv.get(self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    "Stored collection '{}' is unreadable, treating it as empty: {}",
                    self.key, e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replace the whole collection
    pub async fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(self.key, raw).await
    }
}
