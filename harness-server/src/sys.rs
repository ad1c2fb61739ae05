use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - which worker answered
pub async fn hello(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "message": format!("Hello from worker {}", state.worker_id),
        })),
    )
        .into_response()
}

/// GET /sys/info/ping - liveness probe
pub async fn ping() -> Response {
    let info = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(info)).into_response()
}
