use crate::{
    ControlEvent, PoolRegistry, PoolState, ScaleCommand, ShutdownReason, WorkerId, WorkerLauncher,
};

use log::{debug, error, info, warn};
use tokio::sync::mpsc;

/// Applies scale commands to the pool and drives full shutdown.
///
/// All registry mutation happens here, serialized by the control queue;
/// nothing else holds worker handles.
pub struct ScaleController<L: WorkerLauncher> {
    registry: PoolRegistry,
    launcher: L,
    state: PoolState,
    next_id: u32,
}

impl<L: WorkerLauncher> ScaleController<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            registry: PoolRegistry::new(),
            launcher,
            state: PoolState::Running,
            next_id: 0,
        }
    }

    pub fn state(&self) -> PoolState {
        self.state
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    fn next_id(&mut self) -> WorkerId {
        self.next_id += 1;
        WorkerId::new(self.next_id)
    }

    /// Fork and register `amount` new workers.
    ///
    /// A fork failure aborts the remainder; the registry then reflects
    /// only the workers that actually started.
    pub fn scale_up(&mut self, amount: u32) {
        info!("Scaling pool up by {amount}");
        for _ in 0..amount {
            let id = self.next_id();
            let handle = match self.launcher.launch(id) {
                Ok(handle) => handle,
                Err(e) => {
                    error!("Scale-up aborted: {e}");
                    return;
                }
            };
            if let Err(e) = self.registry.register(handle) {
                error!("Scale-up aborted: {e}");
                return;
            }
        }
    }

    /// Kill the `amount` oldest workers.
    ///
    /// When that would leave fewer than one worker the whole pool shuts
    /// down instead. Returns false once the pool has stopped serving.
    pub fn scale_down(&mut self, amount: u32) -> bool {
        info!("Scaling pool down by {amount}");
        if self.registry.size() as u64 <= u64::from(amount) {
            debug!("Scale-down of {amount} leaves no servable pool");
            self.shutdown();
            return false;
        }

        let victims: Vec<WorkerId> = self
            .registry
            .all_ids()
            .into_iter()
            .take(amount as usize)
            .collect();
        for id in victims {
            if let Some(handle) = self.registry.get_mut(id) {
                handle.terminate();
            }
            self.registry.unregister(id);
        }
        true
    }

    /// Terminate every registered worker. Idempotent; does not wait for
    /// the exits, which surface later as pipe EOFs.
    pub fn shutdown(&mut self) {
        if self.state == PoolState::Terminated {
            debug!("Shutdown already complete");
            return;
        }

        self.state = PoolState::ShuttingDown;
        let workers = self.registry.drain();
        info!("Shutting down pool ({} workers)", workers.len());
        for mut handle in workers {
            handle.terminate();
        }
        self.state = PoolState::Terminated;
    }

    /// Note a worker that disappeared without being told to.
    fn worker_exited(&mut self, id: WorkerId) -> bool {
        if self.registry.contains(id) {
            warn!("Worker {id} exited unexpectedly");
            self.registry.unregister(id);
        } else {
            // Normal aftermath of a kill: the pipe EOF arrives after the
            // handle is already gone.
            debug!("Worker {id} exit already handled");
        }

        if self.state == PoolState::Running && self.registry.is_empty() {
            warn!("No workers left, shutting down");
            self.shutdown();
            return false;
        }
        true
    }

    fn apply(&mut self, command: ScaleCommand) -> bool {
        if self.state != PoolState::Running {
            debug!("Pool is {:?}, ignoring {command:?}", self.state);
            return true;
        }

        match command {
            ScaleCommand::ScaleUp { amount } => {
                self.scale_up(amount);
                true
            }
            ScaleCommand::ScaleDown { amount } => self.scale_down(amount),
        }
    }

    /// Process control events until something stops the pool.
    pub async fn run(
        &mut self,
        mut events: mpsc::UnboundedReceiver<ControlEvent>,
    ) -> ShutdownReason {
        while let Some(event) = events.recv().await {
            match event {
                ControlEvent::Scale(command) => {
                    if !self.apply(command) {
                        return ShutdownReason::PoolDrained;
                    }
                }
                ControlEvent::WorkerExited(id) => {
                    if !self.worker_exited(id) {
                        return ShutdownReason::WorkersGone;
                    }
                }
                ControlEvent::Terminate(signal) => {
                    self.shutdown();
                    return ShutdownReason::Signal(signal);
                }
            }
        }

        self.shutdown();
        ShutdownReason::ChannelClosed
    }
}
