#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
//! Subcommands and logging for the `aerodist` CLI.

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

pub mod commands;

pub use commands::Commands;

/// Configures the logger.
///
/// With a `file_name`, logs go to `logs/<file_name>.log` under the current
/// directory, rotated daily, and the path is returned. Otherwise logs go to
/// stderr.
///
/// The returned guard must be held until the program exits so that buffered
/// records are flushed.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(
    file_name: Option<&str>,
    level: LevelFilter,
) -> Result<(LoggerGuard, Option<std::path::PathBuf>), String> {
    let Some(file_name) = file_name else {
        let guard = ftlog::Builder::new()
            .max_log_level(level)
            .try_init()
            .map_err(|e| e.to_string())?;
        return Ok((guard, None));
    };

    let root_dir = std::path::PathBuf::from(".")
        .canonicalize()
        .map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(writer)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, Some(log_path)))
}
