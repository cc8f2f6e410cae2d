//! Gateway configuration read from environment variables.

use std::{collections::HashMap, str::FromStr, time::Duration};

use log::warn;
use url::Url;

use crate::models::{ChainId, ConfigError, DEFAULT_CHAIN_ID};

const DEFAULT_RPC_FALLBACK: &str = "https://eth-mainnet.alchemyapi.io/v2/demo";

/// Chains with a dedicated variable: (chain id, env var, fallback URL)
pub const WELL_KNOWN_ENDPOINTS: &[(&str, &str, &str)] = &[
	("1", "MAINNET_RPC_URL", "https://eth-mainnet.alchemyapi.io/v2/demo"),
	("5", "GOERLI_RPC_URL", "https://eth-goerli.alchemyapi.io/v2/demo"),
	("11155111", "SEPOLIA_RPC_URL", "https://eth-sepolia.alchemyapi.io/v2/demo"),
	("42161", "ARBITRUM_RPC_URL", "https://arb-mainnet.g.alchemy.com/v2/demo"),
	("10", "OPTIMISM_RPC_URL", "https://opt-mainnet.g.alchemy.com/v2/demo"),
	("137", "POLYGON_RPC_URL", "https://polygon-mainnet.g.alchemy.com/v2/demo"),
	("56", "BSC_RPC_URL", "https://bsc-dataseed.binance.org"),
	("43114", "AVALANCHE_RPC_URL", "https://api.avax.network/ext/bc/C/rpc"),
	("31337", "LOCAL_RPC_URL", "http://127.0.0.1:8545"),
	(DEFAULT_CHAIN_ID, "DEFAULT_RPC_URL", DEFAULT_RPC_FALLBACK),
];

/// Prefix for chains configured outside the well-known table, e.g. `RPC_URL_8453`
const CUSTOM_ENDPOINT_PREFIX: &str = "RPC_URL_";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_API_KEY: &str = "test-api-key";
const DEFAULT_RPC_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_RPC_CONNECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_RATE_LIMIT_MAX: u32 = 100;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;

/// Deployment environment, controls how much error detail reaches clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
	#[default]
	Development,
	Production,
	Test,
}

impl Environment {
	/// Whether internal error messages may be returned to clients
	pub fn exposes_error_details(&self) -> bool {
		!matches!(self, Self::Production)
	}
}

impl Environment {
	/// Maps an `ENVIRONMENT` value to an environment
	///
	/// Anything other than the known names is treated as development.
	pub fn from_name(name: &str) -> Self {
		match name.trim().to_lowercase().as_str() {
			"production" | "prod" => Self::Production,
			"test" => Self::Test,
			"development" | "dev" => Self::Development,
			other => {
				warn!("Unknown ENVIRONMENT '{}', treating it as development", other);
				Self::Development
			}
		}
	}
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub api_key: String,
	pub environment: Environment,
	/// Number of actix workers, None for the actix default
	pub workers: Option<usize>,
}

impl ServerConfig {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

/// Static chain id to RPC URL mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
	endpoints: HashMap<ChainId, String>,
}

impl EndpointConfig {
	/// Builds a mapping. The `"default"` entry is taken from `default_url`.
	pub fn new(endpoints: HashMap<ChainId, String>, default_url: impl Into<String>) -> Self {
		let mut endpoints = endpoints;
		endpoints.insert(ChainId::default(), default_url.into());
		Self { endpoints }
	}

	pub fn default_url(&self) -> &str {
		self.endpoints
			.get(&ChainId::default())
			.map(String::as_str)
			.unwrap_or(DEFAULT_RPC_FALLBACK)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ChainId, &String)> {
		self.endpoints.iter()
	}

	pub fn len(&self) -> usize {
		self.endpoints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.endpoints.is_empty()
	}
}

/// Upstream JSON-RPC client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
	pub timeout: Duration,
	pub connect_timeout: Duration,
	/// Extra attempts after a transient failure. 0 means a single attempt.
	pub max_retries: u32,
}

impl Default for RpcConfig {
	fn default() -> Self {
		Self {
			timeout: Duration::from_millis(DEFAULT_RPC_TIMEOUT_MS),
			connect_timeout: Duration::from_millis(DEFAULT_RPC_CONNECT_TIMEOUT_MS),
			max_retries: 0,
		}
	}
}

/// Per-client fixed-window rate limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
	pub enabled: bool,
	pub max_requests: u32,
	pub window: Duration,
}

impl Default for RateLimitConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			max_requests: DEFAULT_RATE_LIMIT_MAX,
			window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
		}
	}
}

/// Complete gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
	pub server: ServerConfig,
	pub endpoints: EndpointConfig,
	pub rpc: RpcConfig,
	pub rate_limit: RateLimitConfig,
}

impl GatewayConfig {
	/// Reads and validates the configuration from the process environment
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_vars(std::env::vars())
	}

	/// Reads and validates the configuration from an explicit set of variables
	///
	/// Variables set to an empty string are treated as unset.
	pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let vars: HashMap<String, String> = vars
			.into_iter()
			.filter(|(_, value)| !value.trim().is_empty())
			.collect();
		let get = |key: &str| vars.get(key).map(|value| value.trim().to_string());

		let in_docker = get("IN_DOCKER").is_some_and(|value| value == "true");
		let host = if in_docker {
			"0.0.0.0".to_string()
		} else {
			get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string())
		};

		let api_key = match get("API_KEY") {
			Some(key) => key,
			None => {
				warn!("API_KEY is not set, falling back to the development key");
				DEFAULT_API_KEY.to_string()
			}
		};

		let server = ServerConfig {
			host,
			port: parse_var(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
			api_key,
			environment: get("ENVIRONMENT")
				.map(|value| Environment::from_name(&value))
				.unwrap_or_default(),
			workers: parse_var(&get, "HTTP_WORKERS")?,
		};

		let mut endpoints = HashMap::new();
		let mut default_url = None;
		for &(chain, env_var, fallback) in WELL_KNOWN_ENDPOINTS {
			let url = get(env_var).unwrap_or_else(|| fallback.to_string());
			if chain == DEFAULT_CHAIN_ID {
				default_url = Some(url);
			} else {
				endpoints.insert(ChainId::new(chain), url);
			}
		}
		for (key, value) in vars.iter() {
			if let Some(chain) = key.strip_prefix(CUSTOM_ENDPOINT_PREFIX) {
				let chain_id = ChainId::new(chain);
				if chain_id.is_default() {
					default_url = Some(value.trim().to_string());
				} else {
					endpoints.insert(chain_id, value.trim().to_string());
				}
			}
		}
		let endpoints = EndpointConfig::new(
			endpoints,
			default_url.unwrap_or_else(|| DEFAULT_RPC_FALLBACK.to_string()),
		);

		let rpc_defaults = RpcConfig::default();
		let rpc = RpcConfig {
			timeout: parse_var(&get, "RPC_TIMEOUT_MS")?
				.map(Duration::from_millis)
				.unwrap_or(rpc_defaults.timeout),
			connect_timeout: parse_var(&get, "RPC_CONNECT_TIMEOUT_MS")?
				.map(Duration::from_millis)
				.unwrap_or(rpc_defaults.connect_timeout),
			max_retries: parse_var(&get, "RPC_MAX_RETRIES")?.unwrap_or(rpc_defaults.max_retries),
		};

		let rate_defaults = RateLimitConfig::default();
		let rate_limit = RateLimitConfig {
			enabled: parse_var(&get, "RATE_LIMIT_ENABLED")?.unwrap_or(rate_defaults.enabled),
			max_requests: parse_var(&get, "RATE_LIMIT_MAX")?.unwrap_or(rate_defaults.max_requests),
			window: parse_var(&get, "RATE_LIMIT_WINDOW_SECS")?
				.map(Duration::from_secs)
				.unwrap_or(rate_defaults.window),
		};

		let config = Self {
			server,
			endpoints,
			rpc,
			rate_limit,
		};
		config.validate()?;
		Ok(config)
	}

	/// Checks that every endpoint is an http(s) URL and that the limits make sense
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.server.api_key.is_empty() {
			return Err(ConfigError::validation_error("API key must not be empty"));
		}

		for (chain_id, url) in self.endpoints.iter() {
			let parsed = Url::parse(url).map_err(|e| {
				ConfigError::validation_error(format!(
					"invalid RPC URL for chain {}: {}",
					chain_id, e
				))
			})?;
			if !matches!(parsed.scheme(), "http" | "https") {
				return Err(ConfigError::validation_error(format!(
					"RPC URL for chain {} must use http or https, got '{}'",
					chain_id,
					parsed.scheme()
				)));
			}
		}

		if self.rate_limit.enabled {
			if self.rate_limit.max_requests == 0 {
				return Err(ConfigError::validation_error(
					"RATE_LIMIT_MAX must be greater than zero",
				));
			}
			if self.rate_limit.window.is_zero() {
				return Err(ConfigError::validation_error(
					"RATE_LIMIT_WINDOW_SECS must be greater than zero",
				));
			}
		}

		Ok(())
	}
}

fn parse_var<T, F>(get: &F, key: &str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
	F: Fn(&str) -> Option<String>,
{
	get(key)
		.map(|value| {
			value.parse::<T>().map_err(|e| {
				ConfigError::parse_error(format!("{} has invalid value '{}': {}", key, value, e))
			})
		})
		.transpose()
}
