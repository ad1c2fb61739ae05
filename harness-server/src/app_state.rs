use crate::ServerStatus;

use harness_pool::{CommandSender, WorkerId};
use harness_store::SyncStore;

use std::sync::Arc;

/// Shared state for one worker's request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Identity of this worker within the pool.
    pub worker_id: WorkerId,
    /// Storage facade the dataset routes forward to.
    pub store: Arc<dyn SyncStore>,
    /// Crash flag read by the status gate.
    pub status: ServerStatus,
    /// Channel back to the controller for scale requests.
    pub commands: CommandSender,
    /// Path prefix subject to the crash gate.
    pub sync_prefix: Arc<str>,
}
