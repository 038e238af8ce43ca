use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Wire up fern logging for the whole process.
///
/// Sink selection: an append-mode log file when one is configured,
/// colored stdout for interactive runs, plain stdout otherwise. Every
/// record is one line: `[<rfc3339> - LEVEL] message [file:line]`.
pub fn initialize(
    log_level: aqua_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let sink = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ServerError::Io {
                path: log_path.display().to_string(),
                source: e,
            })?;

        plain_format(Dispatch::new()).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        // Plain stdout keeps journald and container logs readable.
        plain_format(Dispatch::new()).chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: e.to_string(),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// Uncolored record format shared by the file and plain-stdout sinks.
fn plain_format(dispatch: Dispatch) -> Dispatch {
    dispatch.format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = record.level(),
            message = message,
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}
