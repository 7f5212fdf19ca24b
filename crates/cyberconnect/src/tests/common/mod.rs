use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::data_storage::{DataStorage, DataStorageError};

/// Storage double keeping blobs in a process-local map. Mirrors the
/// overwrite and absent-key semantics of the S3 backend without touching
/// the network.
#[derive(Default)]
pub struct InMemoryDataStorage {
    objects: RwLock<HashMap<String, Bytes>>,
}

impl InMemoryDataStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStorage for InMemoryDataStorage {
    async fn get_data(&self, key: &str) -> Result<Option<Bytes>, DataStorageError> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn put_data(&self, data: Bytes, key: &str) -> Result<(), DataStorageError> {
        self.objects.write().await.insert(key.to_string(), data);
        Ok(())
    }
}
