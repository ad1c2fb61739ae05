use harness_store::Record;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub data: Record,
}
