// ============================================================================
// gridscan-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatch for the gridscan CLI
//
// Log records from gridscan-core go through the `log` facade. The CLI wires
// them to stderr and, when a log directory is given, to a timestamped file.
//
// USAGE:
// - default level: info
// - GRIDSCAN_LOG_LEVEL=debug|trace|warn|error|off: override the default
// - --verbose: force debug, ignoring the environment

use std::fs;
use std::path::{Path, PathBuf};

use gridscan_core::CoreError;
use gridscan_core::config::get_env_string;
use log::LevelFilter;

use crate::error::{CliErrorContext, CliResult};
use crate::output::paint_level;

/// Environment variable holding the default log level.
pub const ENV_LOG_LEVEL: &str = "GRIDSCAN_LOG_LEVEL";

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to give each run its own log file name.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Resolves the log level from the verbose flag and the environment.
pub fn resolve_level(verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    parse_level(&get_env_string(ENV_LOG_LEVEL, "info".to_string()))
}

fn parse_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Returns the log file path, if any.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let level = resolve_level(verbose);

    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{} {}", paint_level(record.level()), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new().level(level).chain(console);

    let log_path = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .cli_with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let path = dir.join(format!("gridscan_run_{}.log", get_timestamp()));
            let file = fern::log_file(&path)
                .cli_with_context(|| format!("Failed to open log file {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} [{}] {}: {}",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
            Some(path)
        }
        None => None,
    };

    dispatch
        .apply()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logging: {}", e)))?;

    if let Some(path) = &log_path {
        log::debug!("Logging to {}", path.display());
    }
    Ok(log_path)
}
