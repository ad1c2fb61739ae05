mod scale_controller;

use crate::{PoolError, PoolResult, WorkerHandle, WorkerId, WorkerLauncher, WorkerProcess};

use std::sync::{Arc, Mutex};

/// Shared view of what a stub launcher forked and what got terminated.
#[derive(Clone, Default)]
pub(crate) struct StubLog {
    inner: Arc<Mutex<StubLogInner>>,
}

#[derive(Default)]
struct StubLogInner {
    launched: Vec<WorkerId>,
    killed: Vec<WorkerId>,
}

impl StubLog {
    pub(crate) fn launched(&self) -> Vec<WorkerId> {
        self.inner.lock().unwrap().launched.clone()
    }

    pub(crate) fn killed(&self) -> Vec<WorkerId> {
        self.inner.lock().unwrap().killed.clone()
    }
}

/// Worker process that records terminations instead of signaling.
pub(crate) struct StubWorker {
    id: WorkerId,
    log: StubLog,
}

impl WorkerProcess for StubWorker {
    fn pid(&self) -> Option<u32> {
        Some(10_000 + self.id.get())
    }

    fn terminate(&mut self) {
        self.log.inner.lock().unwrap().killed.push(self.id);
    }
}

/// Launcher producing stub workers, optionally refusing after a limit.
pub(crate) struct StubLauncher {
    log: StubLog,
    fail_after: Option<usize>,
}

impl StubLauncher {
    pub(crate) fn new() -> (Self, StubLog) {
        let log = StubLog::default();
        (
            Self {
                log: log.clone(),
                fail_after: None,
            },
            log,
        )
    }

    pub(crate) fn failing_after(limit: usize) -> (Self, StubLog) {
        let log = StubLog::default();
        (
            Self {
                log: log.clone(),
                fail_after: Some(limit),
            },
            log,
        )
    }
}

impl WorkerLauncher for StubLauncher {
    fn launch(&mut self, id: WorkerId) -> PoolResult<WorkerHandle> {
        {
            let mut inner = self.log.inner.lock().unwrap();
            if let Some(limit) = self.fail_after
                && inner.launched.len() >= limit
            {
                return Err(PoolError::spawn(id, std::io::Error::other("fork refused")));
            }
            inner.launched.push(id);
        }
        Ok(WorkerHandle::new(
            id,
            Box::new(StubWorker {
                id,
                log: self.log.clone(),
            }),
        ))
    }
}

/// Standalone stub handle for registry tests.
pub(crate) fn stub_handle(id: u32, log: &StubLog) -> WorkerHandle {
    let id = WorkerId::new(id);
    WorkerHandle::new(
        id,
        Box::new(StubWorker {
            id,
            log: log.clone(),
        }),
    )
}

pub(crate) fn ids(raw: &[u32]) -> Vec<WorkerId> {
    raw.iter().copied().map(WorkerId::new).collect()
}
