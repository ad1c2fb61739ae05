use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored record: a caller-supplied JSON body under a store-assigned
/// uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub uid: String,
    pub data: Value,
}
