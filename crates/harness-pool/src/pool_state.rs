/// Lifecycle state of the controller's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// Serving and applying scale commands.
    Running,
    /// Tearing workers down; new scale commands are ignored.
    ShuttingDown,
    /// Every worker has been signaled; the process is about to exit.
    Terminated,
}
