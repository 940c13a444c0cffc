//! Logging setup, in the style of `faxt/src/main.rs`: a `tracing-subscriber`
//! registry with an `EnvFilter` gated by `--debug`, plus (per spec.md §6's
//! "optional log directory defaults to `./logs`") a timestamped file layer
//! so a run's diagnostics survive the terminal scrolling away.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, DriverResult};

/// Initializes the global subscriber. Returns the log file path when one
/// was opened; `./logs` being uncreatable (e.g. a read-only working
/// directory) is not fatal, it just means this run logs to stderr only.
pub fn init(debug: bool) -> DriverResult<Option<PathBuf>> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let log_path = open_log_file();
    let file_layer = log_path.as_ref().map(|(_, file)| {
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file.try_clone().expect("log file handle clones")))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(log_path.map(|(path, _)| path))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = PathBuf::from("./logs");
    if fs::create_dir_all(&dir).is_err() {
        return None;
    }
    let name = format!("{}.log", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(name);
    File::create(&path).ok().map(|f| (path, f))
}
