//! Administrative endpoints: crash simulation and pool scaling.

use crate::AppState;
use crate::api::error::{ApiError, Result};
use crate::api::message_response::MessageResponse;

use harness_pool::ScaleCommand;

use axum::{Json, extract::State};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: StatusFields,
}

#[derive(Debug, Deserialize)]
pub struct StatusFields {
    /// Absent means "report without changing".
    pub crashed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub data: StatusData,
}

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub crashed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScaleRequest {
    pub amount: u32,
}

/// POST /server/status
///
/// Toggle this worker's crash flag. The response reports the flag after
/// the update, so a body without `crashed` reads the current value.
pub async fn update_status(
    State(state): State<AppState>,
    Json(request): Json<UpdateStatusRequest>,
) -> Json<StatusResponse> {
    if let Some(crashed) = request.status.crashed {
        info!("Worker {} crash flag set to {crashed}", state.worker_id);
        state.status.set_crashed(crashed);
    }

    Json(StatusResponse {
        data: StatusData {
            crashed: state.status.crashed(),
        },
    })
}

/// POST /server/scaleUp
///
/// Enqueue a pool grow request. Fire-and-forget: the response does not
/// wait for the controller to act.
pub async fn scale_up(
    State(state): State<AppState>,
    Json(request): Json<ScaleRequest>,
) -> Result<Json<MessageResponse>> {
    info!("worker {}", state.worker_id);
    let amount = validated_amount(request.amount)?;
    state.commands.send(ScaleCommand::ScaleUp { amount });

    Ok(Json(MessageResponse::new("Scaling in progress")))
}

/// POST /server/scaleDown
///
/// Enqueue a pool shrink request. Shrinking below one worker shuts the
/// whole pool down.
pub async fn scale_down(
    State(state): State<AppState>,
    Json(request): Json<ScaleRequest>,
) -> Result<Json<MessageResponse>> {
    info!("worker {}", state.worker_id);
    let amount = validated_amount(request.amount)?;
    state.commands.send(ScaleCommand::ScaleDown { amount });

    Ok(Json(MessageResponse::new("Scaling in progress")))
}

fn validated_amount(amount: u32) -> Result<u32> {
    if amount < 1 {
        return Err(ApiError::validation("amount must be a positive integer"));
    }
    Ok(amount)
}
