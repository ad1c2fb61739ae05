mod dataset_descriptor;
mod error;
mod memory_store;
mod record;
mod sync_store;


pub use dataset_descriptor::DatasetDescriptor;
pub use error::{StoreError, StoreResult};
pub use memory_store::MemoryStore;
pub use record::Record;
pub use sync_store::SyncStore;
