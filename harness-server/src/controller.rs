//! Controller runtime: owns the worker pool and the control queue.

use crate::error::{Result, ServerError};

use harness_config::Config;
use harness_pool::{ControlEvent, ProcessLauncher, ScaleController, listen_for_signals};

use log::info;
use tokio::sync::mpsc;

/// Fork the initial pool, then apply scale commands, worker exits and
/// signals until the pool shuts down. Returning Ok is the clean exit.
pub async fn run(config: &Config) -> Result<()> {
    let (events_tx, events_rx) = mpsc::unbounded_channel::<ControlEvent>();

    listen_for_signals(events_tx.clone())?;

    let launcher = ProcessLauncher::from_current_exe(events_tx)?;
    let mut controller = ScaleController::new(launcher);

    controller.scale_up(config.pool.initial_workers);
    if controller.registry().is_empty() {
        return Err(ServerError::Startup {
            message: "no workers could be forked".to_string(),
        });
    }

    let reason = controller.run(events_rx).await;
    info!("Pool stopped: {reason}");

    Ok(())
}
