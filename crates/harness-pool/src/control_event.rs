use crate::{ScaleCommand, WorkerId};

/// Inbound queue item for the controller loop.
///
/// Scale commands from every worker funnel into one queue and are
/// applied strictly in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A worker requested a pool resize.
    Scale(ScaleCommand),
    /// A worker's command pipe hit EOF, i.e. the process exited.
    WorkerExited(WorkerId),
    /// A termination signal arrived; value is the raw signal number.
    Terminate(i32),
}
