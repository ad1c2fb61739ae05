use serde::Deserialize;
use serde_json::Value;

/// Body for record create and update: the caller's fields under `data`.
#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub data: Value,
}
