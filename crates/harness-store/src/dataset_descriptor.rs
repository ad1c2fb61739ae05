use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dataset as registered with the store, echoing the caller's
/// initialization options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub name: String,
    pub options: Value,
}
