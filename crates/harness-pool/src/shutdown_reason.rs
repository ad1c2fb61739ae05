use std::fmt;

/// Why the controller loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// A scale-down would have left fewer than one worker.
    PoolDrained,
    /// A termination signal arrived; value is the raw signal number.
    Signal(i32),
    /// The last worker exited on its own.
    WorkersGone,
    /// The control queue closed, no further events can arrive.
    ChannelClosed,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::PoolDrained => write!(f, "scale-down drained the pool"),
            ShutdownReason::Signal(signal) => write!(f, "termination signal {signal}"),
            ShutdownReason::WorkersGone => write!(f, "all workers exited"),
            ShutdownReason::ChannelClosed => write!(f, "control queue closed"),
        }
    }
}
