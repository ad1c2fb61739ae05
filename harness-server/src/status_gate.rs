use crate::AppState;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::info;

/// Reject sync-prefixed requests while the crash flag is set.
///
/// Fault injection for client retry testing, not access control: the
/// 403 carries no body and no challenge, matching a worker that stopped
/// serving its sync routes.
pub async fn crash_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.uri().path().starts_with(state.sync_prefix.as_ref()) {
        info!("worker {}", state.worker_id);
        if state.status.crashed() {
            return StatusCode::FORBIDDEN.into_response();
        }
    }

    next.run(request).await
}
