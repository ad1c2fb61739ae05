use harness_pool::WorkerId;
use harness_server::{controller, logger, worker};

use std::error::Error;

use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = harness_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(filename) = &config.logging.file {
        let config_dir = harness_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    // The worker id marker decides the role: forked workers carry it,
    // the controller does not.
    match WorkerId::from_env() {
        Some(worker_id) => {
            info!(
                "Starting sync-harness worker {worker_id} v{}",
                env!("CARGO_PKG_VERSION")
            );
            worker::run(&config, worker_id).await?;
        }
        None => {
            info!(
                "Starting sync-harness controller v{}",
                env!("CARGO_PKG_VERSION")
            );
            config.log_summary();
            controller::run(&config).await?;
        }
    }

    Ok(())
}
