use crate::ControlEvent;

use log::{error, info};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tokio::sync::mpsc;

/// Forward the first termination signal into the control queue.
///
/// Runs on a dedicated thread because the signal iterator blocks; the
/// controller loop turns the event into a full pool shutdown.
pub fn listen_for_signals(events: mpsc::UnboundedSender<ControlEvent>) -> std::io::Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            info!("Received signal {signal}, shutting down pool");
            if events.send(ControlEvent::Terminate(signal)).is_err() {
                error!("Control queue closed before signal {signal} could be delivered");
            }
        }
    });
    Ok(())
}
