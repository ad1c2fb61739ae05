//! Console and file logging setup.
//!
//! Everything goes to stderr: in worker processes stdout is the command
//! pipe back to the controller and must never carry log lines.

use crate::error::{Result, ServerError};

use std::path::{Path, PathBuf};

use fern::colors::{Color, ColoredLevelConfig};
use harness_config::LogLevel;
use log::info;

pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> Result<()> {
    let level = log_level.filter();
    let mut dispatch = fern::Dispatch::new().level(level);

    dispatch = if colored {
        dispatch.chain(colored_stderr())
    } else {
        dispatch.chain(plain_stderr())
    };

    if let Some(path) = &log_file {
        dispatch = dispatch.chain(file_dispatch(path)?);
    }

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: e.to_string(),
    })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={level}, file={}", path.display()),
        None => info!("Logger initialized: level={level}"),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn colored_stderr() -> fern::Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                colors.color(record.level()),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stderr())
}

fn plain_stderr() -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stderr())
}

fn file_dispatch(path: &Path) -> Result<fern::Dispatch> {
    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(fern::log_file(path)?))
}
