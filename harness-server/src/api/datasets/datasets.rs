//! Dataset REST API handlers
//!
//! Thin forwarding layer over the storage facade; seeding and collision
//! setup for sync clients under test.

use crate::AppState;
use crate::api::datasets::{
    create_dataset_request::CreateDatasetRequest, dataset_response::DatasetResponse,
    record_request::RecordRequest, record_response::RecordResponse,
};
use crate::api::error::Result;
use crate::api::message_response::MessageResponse;

use axum::{
    Json,
    extract::{Path, State},
};
use log::debug;

/// POST /datasets
///
/// Register a dataset with the storage facade.
pub async fn create_dataset(
    State(state): State<AppState>,
    Json(request): Json<CreateDatasetRequest>,
) -> Result<Json<DatasetResponse>> {
    let dataset = state
        .store
        .create_dataset(&request.name, request.options)
        .await?;

    Ok(Json(DatasetResponse { data: dataset }))
}

/// POST /datasets/{dataset_id}/reset
///
/// Clear the dataset's backing collections: the dataset itself plus its
/// updates and collision companions.
pub async fn reset_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let updates = format!("{dataset_id}-updates");
    let collisions = format!("{dataset_id}_collision");

    for collection in [dataset_id.as_str(), updates.as_str(), collisions.as_str()] {
        let removed = state.store.delete_all(collection).await?;
        debug!("Cleared {removed} records from {collection}");
    }

    Ok(Json(MessageResponse::new(format!(
        "Dataset {dataset_id} reset"
    ))))
}

/// POST /datasets/{dataset_id}/records
pub async fn create_record(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
    Json(request): Json<RecordRequest>,
) -> Result<Json<RecordResponse>> {
    let record = state.store.create_record(&dataset_id, request.data).await?;

    Ok(Json(RecordResponse { data: record }))
}

/// PUT /datasets/{dataset_id}/records/{record_id}
///
/// Out-of-band update used to provoke sync collisions on a known
/// record.
pub async fn update_record(
    State(state): State<AppState>,
    Path((dataset_id, record_id)): Path<(String, String)>,
    Json(request): Json<RecordRequest>,
) -> Result<Json<RecordResponse>> {
    let record = state
        .store
        .update_record(&dataset_id, &record_id, request.data)
        .await?;

    Ok(Json(RecordResponse { data: record }))
}
