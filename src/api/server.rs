//! Route table and HTTP server construction.

use actix_web::{dev::Server, middleware::from_fn, web, App, HttpRequest, HttpServer};
use tracing::info;

use crate::{
	api::{
		handlers::{contracts, health, metrics, transactions},
		middleware::{
			enforce_rate_limit, mask_server_errors, request_context, require_api_key, RateLimiter,
		},
		ApiError, AppState,
	},
	models::{GatewayConfig, ServerConfig},
	services::blockchain::ClientPoolTrait,
};

/// Renders extractor failures (bad JSON, query or path) as 400 envelopes
fn bad_request<E: std::fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
	ApiError::InvalidInput(err.to_string()).into()
}

/// Registers shared data, extractor settings and every route
pub fn configure<P: ClientPoolTrait + 'static>(
	cfg: &mut web::ServiceConfig,
	state: web::Data<AppState<P>>,
	server: web::Data<ServerConfig>,
	limiter: web::Data<RateLimiter>,
) {
	cfg.app_data(state)
		.app_data(server)
		.app_data(limiter)
		.app_data(web::JsonConfig::default().error_handler(bad_request))
		.app_data(web::QueryConfig::default().error_handler(bad_request))
		.app_data(web::PathConfig::default().error_handler(bad_request))
		.service(
			web::scope("/api")
				.route("/health", web::get().to(health::health))
				.route("/metrics", web::get().to(metrics::metrics))
				.service(
					web::scope("/contracts")
						.wrap(from_fn(require_api_key))
						.route("/{address}", web::get().to(contracts::get_contract::<P>))
						.route("/{address}/abi", web::get().to(contracts::get_contract::<P>))
						.route(
							"/{address}/call/{function_name}",
							web::get().to(contracts::call_function::<P>),
						)
						.route(
							"/{address}/prepare-tx/{function_name}",
							web::post().to(contracts::prepare_transaction::<P>),
						),
				)
				.service(
					web::scope("/transactions")
						.wrap(from_fn(require_api_key))
						.route(
							"/estimate-gas",
							web::post().to(transactions::estimate_gas::<P>),
						)
						.route("/{tx_hash}", web::get().to(transactions::get_receipt::<P>))
						.route(
							"/{tx_hash}/status",
							web::get().to(transactions::get_status::<P>),
						),
				)
				.wrap(from_fn(mask_server_errors))
				.wrap(from_fn(enforce_rate_limit))
				.wrap(from_fn(request_context)),
		);
}

/// Creates the HTTP server bound to the configured address
///
/// # Arguments
/// * `state` - Services shared by all workers
/// * `config` - Gateway configuration
///
/// # Returns
/// * `std::io::Result<Server>` - Running server future, or a bind error
pub fn create_server<P: ClientPoolTrait + 'static>(
	state: AppState<P>,
	config: &GatewayConfig,
) -> std::io::Result<Server> {
	let state = web::Data::new(state);
	let server_config = web::Data::new(config.server.clone());
	let limiter = web::Data::new(RateLimiter::new(config.rate_limit.clone()));
	let address = config.server.bind_address();

	info!(address = %address, environment = ?config.server.environment, "Starting HTTP server");

	let mut server = HttpServer::new(move || {
		let state = state.clone();
		let server_config = server_config.clone();
		let limiter = limiter.clone();
		App::new().configure(move |cfg| configure(cfg, state, server_config, limiter))
	})
	.shutdown_timeout(5);

	if let Some(workers) = config.server.workers {
		server = server.workers(workers);
	}

	Ok(server.bind(address)?.run())
}
