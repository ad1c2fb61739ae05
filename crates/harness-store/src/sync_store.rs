use crate::{DatasetDescriptor, Record, StoreResult};

use async_trait::async_trait;
use serde_json::Value;

/// Storage facade the dataset routes forward to.
///
/// The worker treats storage as an opaque backend: uids are assigned
/// here, collections are created on first touch, and `delete_all`
/// accepts collection names that were never written to.
#[async_trait]
pub trait SyncStore: Send + Sync {
    /// Register a dataset and remember its initialization options.
    async fn create_dataset(&self, name: &str, options: Value) -> StoreResult<DatasetDescriptor>;

    /// Insert a record with a fresh uid into the named collection.
    async fn create_record(&self, dataset: &str, fields: Value) -> StoreResult<Record>;

    /// Replace the body of an existing record.
    async fn update_record(&self, dataset: &str, uid: &str, fields: Value) -> StoreResult<Record>;

    /// Remove every record in the collection, returning the count.
    async fn delete_all(&self, collection: &str) -> StoreResult<u64>;
}
