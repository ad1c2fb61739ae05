use crate::{DatasetDescriptor, Record, StoreError, StoreResult, SyncStore};

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct MemoryInner {
    datasets: HashMap<String, DatasetDescriptor>,
    collections: HashMap<String, HashMap<String, Value>>,
}

/// Process-local storage backend.
///
/// Each worker owns its own instance, so records written through one
/// worker are invisible to its siblings. That asymmetry is what the
/// sync clients under test are expected to reconcile.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in a collection.
    pub async fn collection_size(&self, collection: &str) -> usize {
        let inner = self.inner.read().await;
        inner.collections.get(collection).map_or(0, HashMap::len)
    }
}

#[async_trait]
impl SyncStore for MemoryStore {
    async fn create_dataset(&self, name: &str, options: Value) -> StoreResult<DatasetDescriptor> {
        let descriptor = DatasetDescriptor {
            name: name.to_string(),
            options,
        };

        let mut inner = self.inner.write().await;
        inner.datasets.insert(name.to_string(), descriptor.clone());
        info!("Registered dataset {name}");

        Ok(descriptor)
    }

    async fn create_record(&self, dataset: &str, fields: Value) -> StoreResult<Record> {
        let uid = Uuid::new_v4().to_string();

        let mut inner = self.inner.write().await;
        inner
            .collections
            .entry(dataset.to_string())
            .or_default()
            .insert(uid.clone(), fields.clone());
        debug!("Created record {uid} in {dataset}");

        Ok(Record { uid, data: fields })
    }

    async fn update_record(&self, dataset: &str, uid: &str, fields: Value) -> StoreResult<Record> {
        let mut inner = self.inner.write().await;
        let collection = inner
            .collections
            .get_mut(dataset)
            .ok_or_else(|| StoreError::unknown_record(dataset, uid))?;

        match collection.get_mut(uid) {
            Some(stored) => {
                *stored = fields.clone();
                debug!("Updated record {uid} in {dataset}");
                Ok(Record {
                    uid: uid.to_string(),
                    data: fields,
                })
            }
            None => Err(StoreError::unknown_record(dataset, uid)),
        }
    }

    async fn delete_all(&self, collection: &str) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let removed = inner
            .collections
            .remove(collection)
            .map_or(0, |records| records.len() as u64);
        debug!("Cleared {removed} records from {collection}");

        Ok(removed)
    }
}
