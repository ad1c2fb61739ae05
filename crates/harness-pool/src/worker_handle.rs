use crate::{WorkerId, WorkerProcess};

use std::fmt;

/// One live worker as tracked by the registry.
pub struct WorkerHandle {
    id: WorkerId,
    process: Box<dyn WorkerProcess>,
}

impl WorkerHandle {
    pub fn new(id: WorkerId, process: Box<dyn WorkerProcess>) -> Self {
        Self { id, process }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn pid(&self) -> Option<u32> {
        self.process.pid()
    }

    /// Ask the underlying process to terminate. Fire-and-forget.
    pub fn terminate(&mut self) {
        self.process.terminate();
    }
}

impl fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("id", &self.id)
            .field("pid", &self.process.pid())
            .finish()
    }
}
