//! EVM gateway entry point.
//!
//! This binary serves the HTTP API for reading contract state and transaction
//! status from EVM networks.
//!
//! # Flow
//! 1. Parses CLI flags and loads `.env`
//! 2. Sets up logging
//! 3. Loads and validates the gateway configuration
//! 4. Initializes the client pool and services
//! 5. Serves HTTP until the server stops or Ctrl+C is received

use evm_gateway::{
	api::create_server,
	bootstrap::initialize_services,
	models::GatewayConfig,
	utils::logging::setup_logging,
};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use tracing::{error, info};

/// Main entry point for the gateway.
///
/// # Errors
/// Returns an error if configuration or service initialization fails, or if the
/// server cannot bind its address.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Initialize command-line interface
	let matches = Command::new("evm-gateway")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"An HTTP gateway for reading smart-contract state and transaction status from EVM \
			 networks through upstream JSON-RPC nodes.",
		)
		.arg(
			Arg::new("host")
				.long("host")
				.help("Address to bind the HTTP server to (default: 127.0.0.1)")
				.value_name("HOST"),
		)
		.arg(
			Arg::new("port")
				.long("port")
				.help("Port to bind the HTTP server to (default: 3001)")
				.value_name("PORT"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	let overrides = [
		("host", "HOST"),
		("port", "PORT"),
		("log-level", "LOG_LEVEL"),
		("log-path", "LOG_DATA_DIR"),
	];
	for (flag, env_var) in overrides {
		if let Some(value) = matches.get_one::<String>(flag) {
			if var(env_var).is_err() {
				set_var(env_var, value);
			}
		}
	}

	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	// Keep the guard alive so buffered file logs are flushed on exit
	let _log_guard = setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
		None
	});

	let config = GatewayConfig::from_env()
		.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
	let state = initialize_services(&config)
		.map_err(|e| anyhow::anyhow!("Failed to initialize services: {}", e))?;

	let server = create_server(state, &config)?;
	let handle = server.handle();

	info!(
		address = %config.server.bind_address(),
		"Gateway started. Press Ctrl+C to shutdown"
	);

	tokio::select! {
		result = server => {
			if let Err(e) = result {
				error!("HTTP server error: {}", e);
				return Err(e.into());
			}
			info!("HTTP server stopped");
		}
		result = tokio::signal::ctrl_c() => {
			if let Err(e) = result {
				error!("Error waiting for Ctrl+C: {}", e);
			}
			info!("Shutdown signal received, stopping HTTP server...");
			handle.stop(true).await;
		}
	}

	info!("Shutdown complete");
	Ok(())
}
