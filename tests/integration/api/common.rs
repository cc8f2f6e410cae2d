use std::sync::{atomic::AtomicUsize, Arc};

use actix_web::web;
use serde_json::Value;

use evm_gateway::{
	api::{configure, middleware::RateLimiter, AppState},
	models::{Environment, RateLimitConfig, ServerConfig},
	services::{
		blockchain::{ClientPool, TransportError},
		contract::StaticInterfaceSource,
	},
};

use crate::integration::mocks::{create_mock_pool, create_test_repository, MockEVMTransportClient};

pub const API_KEY: &str = "integration-key";

pub type MockPool = ClientPool<MockEVMTransportClient>;

pub fn server_config(environment: Environment) -> ServerConfig {
	ServerConfig {
		host: "127.0.0.1".to_string(),
		port: 3001,
		api_key: API_KEY.to_string(),
		environment,
		workers: None,
	}
}

/// State whose chain clients answer every request with `respond`
pub fn create_state<R>(respond: R) -> (AppState<MockPool>, Arc<AtomicUsize>)
where
	R: Fn(&str, Option<Vec<Value>>) -> Result<Value, TransportError>
		+ Send
		+ Sync
		+ Clone
		+ 'static,
{
	let (pool, constructions) = create_mock_pool(create_test_repository(), move |_| {
		let respond = respond.clone();
		let mut mock = MockEVMTransportClient::new();
		mock.expect_send_raw_request()
			.returning(move |method, params| respond(method, params));
		Ok(mock)
	});

	let source = Arc::new(StaticInterfaceSource::erc20().unwrap());
	(AppState::new(Arc::new(pool), source), constructions)
}

/// State for routes that must never reach a chain client
pub fn create_offline_state() -> (AppState<MockPool>, Arc<AtomicUsize>) {
	create_state(|method, _| panic!("unexpected upstream call {}", method))
}

/// App configuration with the given environment and rate limit
pub fn gateway(
	state: AppState<MockPool>,
	environment: Environment,
	rate_limit: RateLimitConfig,
) -> impl FnOnce(&mut web::ServiceConfig) {
	move |cfg| {
		configure(
			cfg,
			web::Data::new(state),
			web::Data::new(server_config(environment)),
			web::Data::new(RateLimiter::new(rate_limit)),
		)
	}
}

/// Development gateway with the default rate limit
pub fn dev_gateway(state: AppState<MockPool>) -> impl FnOnce(&mut web::ServiceConfig) {
	gateway(state, Environment::Development, RateLimitConfig::default())
}
