pub mod admin;
pub mod api;
pub mod app_state;
pub mod controller;
pub mod error;
pub mod listener;
pub mod logger;
pub mod routes;
pub mod server_status;
pub mod status_gate;
pub mod sys;
pub mod worker;

pub use crate::app_state::AppState;
pub use crate::error::{Result, ServerError};
pub use crate::routes::build_router;
pub use crate::server_status::ServerStatus;
