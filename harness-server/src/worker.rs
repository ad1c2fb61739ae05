//! Worker runtime: one HTTP listener serving the harness routes.

use crate::error::{Result, ServerError};
use crate::{AppState, ServerStatus, build_router, listener};

use harness_config::Config;
use harness_pool::{CommandSender, WorkerId};
use harness_store::MemoryStore;

use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tokio::sync::oneshot;

/// Serve HTTP until the controller (or an operator) terminates us.
pub async fn run(config: &Config, worker_id: WorkerId) -> Result<()> {
    let (commands, command_writer) = CommandSender::stdout();

    let state = AppState {
        worker_id,
        store: Arc::new(MemoryStore::new()),
        status: ServerStatus::new(),
        commands,
        sync_prefix: Arc::from(config.server.sync_prefix.as_str()),
    };

    let app = build_router(state);

    let addr: SocketAddr = config.bind_addr().parse().map_err(|e| ServerError::Addr {
        addr: config.bind_addr(),
        source: e,
    })?;
    let http_listener = listener::bind_shared(addr)?;
    info!(
        "Worker {worker_id} listening on {}",
        http_listener.local_addr()?
    );

    let shutdown_rx = shutdown_on_signal()?;

    axum::serve(http_listener, app)
        .with_graceful_shutdown(async move {
            if let Ok(signal) = shutdown_rx.await {
                info!("Worker {worker_id} received signal {signal}, shutting down");
            }
        })
        .await?;

    // Closes the stdout pipe; any queued commands are dropped.
    command_writer.abort();
    info!("Worker {worker_id} stopped");
    Ok(())
}

/// Resolve once the first termination signal arrives.
fn shutdown_on_signal() -> std::io::Result<oneshot::Receiver<i32>> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next()
            && tx.send(signal).is_err()
        {
            error!("Worker already shutting down, signal {signal} ignored");
        }
    });
    Ok(rx)
}
