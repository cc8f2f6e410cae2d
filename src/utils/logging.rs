//! Logging utilities for the application
//!
//! This module provides utilities for setting up and configuring logging for the application.
//! It uses the `tracing_subscriber` crate to configure the logging; records emitted through
//! the `log` facade are bridged into the same subscriber.
//!
//! The `setup_logging` function reads `LOG_MODE`, `LOG_LEVEL` and `LOG_DATA_DIR` and writes
//! either to stdout or to a daily-rolling file through `tracing_appender`.
//!
//! The `setup_logging_with_writer` function sets up the logging for the application with a custom
//! writer.
use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directory used for log files when `LOG_DATA_DIR` is not set
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// Base name of the rolling log file
pub const LOG_FILE_NAME: &str = "evm-gateway.log";

type LoggingResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Setup logging for the application
///
/// With `LOG_MODE=file` logs go to `LOG_DATA_DIR` (default `logs/`), otherwise to stdout.
/// The returned guard must be held for the lifetime of the process in file mode, dropping it
/// flushes and stops the background writer.
pub fn setup_logging() -> LoggingResult<Option<WorkerGuard>> {
	let log_mode = env::var("LOG_MODE").unwrap_or_default();
	if log_mode.eq_ignore_ascii_case("file") {
		let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
		std::fs::create_dir_all(&log_dir)?;
		let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
		let (writer, guard) = tracing_appender::non_blocking(appender);
		init_subscriber(writer, false)?;
		Ok(Some(guard))
	} else {
		setup_logging_with_writer(std::io::stdout)?;
		Ok(None)
	}
}

/// Setup logging for the application with a custom writer
///
/// This function sets up the logging for the application with a custom writer.
/// It uses the `tracing_subscriber` crate to configure the logging.
pub fn setup_logging_with_writer<W>(writer: W) -> LoggingResult<()>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	init_subscriber(writer, true)
}

/// Builds the level filter. `RUST_LOG` wins over `LOG_LEVEL`, the default is `info`.
fn build_filter() -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}
	env::var("LOG_LEVEL")
		.ok()
		.and_then(|level| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_subscriber<W>(writer: W, ansi: bool) -> LoggingResult<()>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter())
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
