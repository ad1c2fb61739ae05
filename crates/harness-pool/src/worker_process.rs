use crate::WorkerId;

use log::{debug, warn};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tokio::process::Child;

/// Minimal view of a worker's OS process.
///
/// Production workers wrap a forked child; tests substitute stubs that
/// record the terminations they receive.
pub trait WorkerProcess: Send {
    /// OS process id, while the process is still owned.
    fn pid(&self) -> Option<u32>;

    /// Send the termination signal.
    ///
    /// Best-effort: no confirmation is awaited and repeat calls are
    /// no-ops. The actual exit surfaces later as a pipe EOF.
    fn terminate(&mut self);
}

/// A worker backed by a forked child process.
pub struct ChildWorker {
    id: WorkerId,
    child: Option<Child>,
}

impl ChildWorker {
    pub fn new(id: WorkerId, child: Child) -> Self {
        Self {
            id,
            child: Some(child),
        }
    }
}

impl WorkerProcess for ChildWorker {
    fn pid(&self) -> Option<u32> {
        self.child.as_ref().and_then(|child| child.id())
    }

    fn terminate(&mut self) {
        let Some(child) = self.child.take() else {
            return;
        };

        match child.id() {
            Some(pid) => {
                debug!("Sending SIGTERM to worker {} (pid {pid})", self.id);
                if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    warn!("Failed to signal worker {} (pid {pid}): {e}", self.id);
                }
                // Reap the child off to the side; the pool does not wait
                // for exits, it observes them through the pipe EOF.
                let mut child = child;
                tokio::spawn(async move {
                    let _ = child.wait().await;
                });
            }
            None => debug!("Worker {} already exited", self.id),
        }
    }
}
