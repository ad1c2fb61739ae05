use harness_store::DatasetDescriptor;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub data: DatasetDescriptor,
}
