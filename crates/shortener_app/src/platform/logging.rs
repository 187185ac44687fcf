//! Platform logging initialization for the shortener app.
//!
//! The terminal belongs to the UI while the app runs, so logs only go to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to `path`, truncating it at startup.
    File { path: PathBuf, level: LevelFilter },
    /// No logging.
    Disabled,
}

/// Initialize the global logger for `destination`.
///
/// Failing to create the log file is reported on stderr and leaves logging off;
/// it never stops the app.
pub fn initialize(destination: &LogDestination) {
    let LogDestination::File { path, level } = destination else {
        return;
    };

    let loggers: Vec<Box<dyn SharedLogger>> = match create_file_logger(path, *level, build_config()) {
        Some(file_logger) => vec![file_logger],
        None => return,
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(path: &Path, level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory {:?}: {}", parent, err);
            return None;
        }
    }
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
