//! Bootstrap module for initializing services.
//!
//! Builds the shared upstream HTTP client, the endpoint registry, the client pool
//! and the services consumed by the HTTP handlers, in that order.
//!
//! # Services
//! - `ClientPool`: one cached chain client per chain id
//! - `ContractService`: contract reads and transaction preparation
//! - `TransactionService`: receipts, status and gas estimation

use std::{error::Error, sync::Arc};

use crate::{
	api::AppState,
	models::GatewayConfig,
	repositories::{EndpointRepository, EndpointRepositoryTrait},
	services::{
		blockchain::{ClientPool, TransientErrorRetryStrategy},
		contract::{InterfaceSource, StaticInterfaceSource},
	},
	utils::http::{create_base_http_client, create_retryable_http_client, HttpRetryConfig},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Initializes all required services for the gateway.
///
/// All chain clients share a single pooled HTTP client. Endpoint URLs are
/// validated here, so a malformed URL fails startup instead of the first request.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built or an endpoint URL is invalid
pub fn initialize_services(config: &GatewayConfig) -> Result<AppState<ClientPool>> {
	let base_client = create_base_http_client(&config.rpc)?;
	let http_client = create_retryable_http_client(
		&HttpRetryConfig::from(&config.rpc),
		base_client,
		Some(TransientErrorRetryStrategy),
	);

	let endpoints: Arc<dyn EndpointRepositoryTrait> =
		Arc::new(EndpointRepository::new(&config.endpoints)?);
	tracing::info!(
		configured_chains = config.endpoints.len(),
		default_url = %config.endpoints.default_url(),
		max_retries = config.rpc.max_retries,
		"Endpoint registry loaded"
	);

	let client_pool = Arc::new(ClientPool::new(endpoints, http_client));
	let interface_source: Arc<dyn InterfaceSource> = Arc::new(StaticInterfaceSource::erc20()?);

	Ok(AppState::new(client_pool, interface_source))
}
