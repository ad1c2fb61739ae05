use crate::{PoolError, PoolResult, WorkerHandle, WorkerId};

use std::collections::BTreeMap;

use log::{info, warn};

/// Ordered registry of live workers.
///
/// Ids are assigned monotonically, so ascending key order equals fork
/// order; `all_ids` relies on this for oldest-first victim selection.
#[derive(Default)]
pub struct PoolRegistry {
    workers: BTreeMap<WorkerId, WorkerHandle>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self {
            workers: BTreeMap::new(),
        }
    }

    /// Track a newly forked worker.
    pub fn register(&mut self, handle: WorkerHandle) -> PoolResult<()> {
        let id = handle.id();
        if self.workers.contains_key(&id) {
            return Err(PoolError::duplicate_worker(id));
        }

        self.workers.insert(id, handle);
        info!("Registered worker {id} ({} total)", self.workers.len());
        Ok(())
    }

    /// Strict removal for callers that know the id is present.
    pub fn remove(&mut self, id: WorkerId) -> PoolResult<WorkerHandle> {
        match self.workers.remove(&id) {
            Some(handle) => {
                info!("Unregistered worker {id} ({} remaining)", self.workers.len());
                Ok(handle)
            }
            None => Err(PoolError::missing_worker(id)),
        }
    }

    /// Stop tracking a worker, returning its handle.
    ///
    /// An unknown id is a warning, not an error: the worker may have
    /// exited on its own and been removed already.
    pub fn unregister(&mut self, id: WorkerId) -> Option<WorkerHandle> {
        match self.remove(id) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    pub fn get_mut(&mut self, id: WorkerId) -> Option<&mut WorkerHandle> {
        self.workers.get_mut(&id)
    }

    pub fn contains(&self, id: WorkerId) -> bool {
        self.workers.contains_key(&id)
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Worker ids, oldest first.
    pub fn all_ids(&self) -> Vec<WorkerId> {
        self.workers.keys().copied().collect()
    }

    /// Take every handle out of the registry, oldest first.
    pub fn drain(&mut self) -> Vec<WorkerHandle> {
        std::mem::take(&mut self.workers).into_values().collect()
    }
}
