mod command_sender;
mod control_event;
mod error;
mod pool_registry;
mod pool_state;
mod process_launcher;
mod scale_command;
mod scale_controller;
mod shutdown_reason;
mod signal_listener;
mod worker_handle;
mod worker_id;
mod worker_process;

#[cfg(test)]
mod tests;

pub use command_sender::CommandSender;
pub use control_event::ControlEvent;
pub use error::{PoolError, PoolResult};
pub use pool_registry::PoolRegistry;
pub use pool_state::PoolState;
pub use process_launcher::{ProcessLauncher, WorkerLauncher};
pub use scale_command::ScaleCommand;
pub use scale_controller::ScaleController;
pub use shutdown_reason::ShutdownReason;
pub use signal_listener::listen_for_signals;
pub use worker_handle::WorkerHandle;
pub use worker_id::{WORKER_ID_ENV, WorkerId};
pub use worker_process::{ChildWorker, WorkerProcess};
