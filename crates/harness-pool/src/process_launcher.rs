use crate::{
    ChildWorker, ControlEvent, PoolError, PoolResult, ScaleCommand, WORKER_ID_ENV, WorkerHandle,
    WorkerId,
};

use std::path::PathBuf;
use std::process::Stdio;

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

/// Forks worker processes for the controller.
///
/// A trait seam so controller tests can fork stub workers without
/// touching the OS.
pub trait WorkerLauncher: Send {
    fn launch(&mut self, id: WorkerId) -> PoolResult<WorkerHandle>;
}

/// Forks real workers by re-executing a binary with the worker id
/// marker set, normally the controller's own executable.
pub struct ProcessLauncher {
    program: PathBuf,
    events: mpsc::UnboundedSender<ControlEvent>,
}

impl ProcessLauncher {
    /// Command lines read from each worker's stdout are forwarded to
    /// `events` as they arrive, followed by a worker-exited event at
    /// pipe EOF.
    pub fn new(program: PathBuf, events: mpsc::UnboundedSender<ControlEvent>) -> Self {
        Self { program, events }
    }

    pub fn from_current_exe(events: mpsc::UnboundedSender<ControlEvent>) -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?, events))
    }
}

impl WorkerLauncher for ProcessLauncher {
    fn launch(&mut self, id: WorkerId) -> PoolResult<WorkerHandle> {
        let mut cmd = Command::new(&self.program);
        cmd.env(WORKER_ID_ENV, id.to_string())
            // stdout is the command channel; worker logs go to stderr.
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(false);

        // Workers get their own session so terminal signals reach the
        // controller once, not every process in the pool.
        #[cfg(unix)]
        unsafe {
            cmd.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }

        let mut child = cmd.spawn().map_err(|e| PoolError::spawn(id, e))?;
        let pid = child.id().unwrap_or_default();

        let stdout = child.stdout.take();
        let events = self.events.clone();
        tokio::spawn(async move {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                loop {
                    match lines.next_line().await {
                        Ok(Some(line)) => {
                            let line = line.trim();
                            if line.is_empty() {
                                continue;
                            }
                            match serde_json::from_str::<ScaleCommand>(line) {
                                Ok(command) => {
                                    debug!("Worker {id} sent {command:?}");
                                    if events.send(ControlEvent::Scale(command)).is_err() {
                                        return;
                                    }
                                }
                                Err(e) => {
                                    warn!("Ignoring malformed command from worker {id}: {e}");
                                }
                            }
                        }
                        Ok(None) => break,
                        Err(e) => {
                            warn!("Command pipe error for worker {id}: {e}");
                            break;
                        }
                    }
                }
            }
            let _ = events.send(ControlEvent::WorkerExited(id));
        });

        info!("Forked worker {id} (pid {pid})");
        Ok(WorkerHandle::new(id, Box::new(ChildWorker::new(id, child))))
    }
}
