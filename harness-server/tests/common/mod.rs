#![allow(dead_code)]

use harness_pool::{CommandSender, ScaleCommand, WorkerId};
use harness_server::{AppState, ServerStatus, build_router};
use harness_store::{DatasetDescriptor, MemoryStore, Record, StoreError, StoreResult, SyncStore};

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;

/// Worker id every test server reports.
pub const TEST_WORKER_ID: u32 = 3;

/// Prefix guarded by the crash gate in tests.
pub const TEST_SYNC_PREFIX: &str = "/mbaas/sync";

/// Test server plus the handles the routes act on.
pub struct TestHarness {
    pub server: TestServer,
    pub status: ServerStatus,
    pub commands: UnboundedReceiver<ScaleCommand>,
}

/// Create a TestServer over a fresh in-memory store.
pub fn create_test_server() -> TestHarness {
    create_test_server_with_store(Arc::new(MemoryStore::new()))
}

/// Create a TestServer over a caller-supplied store.
pub fn create_test_server_with_store(store: Arc<dyn SyncStore>) -> TestHarness {
    let (commands, commands_rx) = CommandSender::channel();
    let status = ServerStatus::new();

    let state = AppState {
        worker_id: WorkerId::new(TEST_WORKER_ID),
        store,
        status: status.clone(),
        commands,
        sync_prefix: Arc::from(TEST_SYNC_PREFIX),
    };

    let server = TestServer::builder()
        .http_transport()
        .build(build_router(state))
        .expect("Failed to create test server");

    TestHarness {
        server,
        status,
        commands: commands_rx,
    }
}

/// Store whose every call fails, for facade error paths.
pub struct FailingStore;

#[async_trait]
impl SyncStore for FailingStore {
    async fn create_dataset(&self, _name: &str, _options: Value) -> StoreResult<DatasetDescriptor> {
        Err(StoreError::backend("facade unavailable"))
    }

    async fn create_record(&self, _dataset: &str, _fields: Value) -> StoreResult<Record> {
        Err(StoreError::backend("facade unavailable"))
    }

    async fn update_record(
        &self,
        _dataset: &str,
        _uid: &str,
        _fields: Value,
    ) -> StoreResult<Record> {
        Err(StoreError::backend("facade unavailable"))
    }

    async fn delete_all(&self, _collection: &str) -> StoreResult<u64> {
        Err(StoreError::backend("facade unavailable"))
    }
}
