//! Gateway configuration.
//!
//! Configuration is read once at startup from environment variables (optionally
//! seeded from a `.env` file) and is immutable afterwards.

mod error;
mod gateway_config;

pub use error::ConfigError;
pub use gateway_config::{
	EndpointConfig, Environment, GatewayConfig, RateLimitConfig, RpcConfig, ServerConfig,
	WELL_KNOWN_ENDPOINTS,
};
