use crate::api::datasets::datasets;
use crate::{AppState, admin, status_gate, sys};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Worker identity and liveness
        .route("/", get(sys::hello))
        .route("/sys/info/ping", get(sys::ping))
        // Administrative endpoints
        .route("/server/status", post(admin::update_status))
        .route("/server/scaleUp", post(admin::scale_up))
        .route("/server/scaleDown", post(admin::scale_down))
        // Dataset endpoints
        .route("/datasets", post(datasets::create_dataset))
        .route("/datasets/{dataset_id}/reset", post(datasets::reset_dataset))
        .route(
            "/datasets/{dataset_id}/records",
            post(datasets::create_record),
        )
        .route(
            "/datasets/{dataset_id}/records/{record_id}",
            put(datasets::update_record),
        )
        // Crash gate runs ahead of every route, including unmatched
        // sync-prefix paths
        .layer(middleware::from_fn_with_state(
            state.clone(),
            status_gate::crash_gate,
        ))
        // Add shared state
        .with_state(state)
        // CORS middleware for the browser-based test clients
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
