use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateDatasetRequest {
    /// Dataset name (required)
    pub name: String,

    /// Initialization options passed through to the storage facade
    #[serde(default)]
    pub options: Value,
}
