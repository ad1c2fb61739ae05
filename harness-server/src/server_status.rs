use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Worker-local crash simulation flag.
///
/// Every worker process owns an independent flag, so toggling it only
/// affects requests the kernel happens to route to that worker.
#[derive(Clone, Debug, Default)]
pub struct ServerStatus {
    crashed: Arc<AtomicBool>,
}

impl ServerStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crashed(&self) -> bool {
        self.crashed.load(Ordering::Relaxed)
    }

    pub fn set_crashed(&self, crashed: bool) {
        self.crashed.store(crashed, Ordering::Relaxed);
    }
}
