//! Endpoint registry: resolves chain identifiers to upstream RPC endpoints.

use std::collections::HashMap;

use url::Url;

use crate::{
	models::{ChainId, Endpoint, EndpointConfig},
	repositories::error::RepositoryError,
};

/// In-memory registry built once at startup
#[derive(Debug, Clone)]
pub struct EndpointRepository {
	endpoints: HashMap<ChainId, Endpoint>,
	default_endpoint: Endpoint,
}

impl EndpointRepository {
	/// Builds the registry from an endpoint mapping, rejecting non-http(s) URLs
	pub fn new(config: &EndpointConfig) -> Result<Self, RepositoryError> {
		let mut endpoints = HashMap::with_capacity(config.len());
		for (chain_id, url) in config.iter() {
			let parsed = Url::parse(url).map_err(|e| {
				RepositoryError::validation_error(format!(
					"Invalid RPC URL for chain {}: {}",
					chain_id, e
				))
			})?;
			if !matches!(parsed.scheme(), "http" | "https") {
				return Err(RepositoryError::validation_error(format!(
					"Unsupported scheme for chain {}: {}",
					chain_id,
					parsed.scheme()
				)));
			}
			endpoints.insert(chain_id.clone(), Endpoint::new(chain_id.clone(), url.clone()));
		}

		let default_endpoint = Endpoint::new(ChainId::default(), config.default_url());
		Ok(Self {
			endpoints,
			default_endpoint,
		})
	}
}

/// Interface for endpoint lookups
pub trait EndpointRepositoryTrait: Send + Sync {
	/// Resolves a chain id to its endpoint, falling back to the default endpoint
	///
	/// The returned endpoint keeps the requested chain id even when it was bound to
	/// the default URL.
	fn resolve(&self, chain_id: &ChainId) -> Endpoint;

	/// Exact lookup, no fallback
	fn get(&self, chain_id: &ChainId) -> Option<Endpoint>;

	fn get_all(&self) -> HashMap<ChainId, Endpoint>;
}

impl EndpointRepositoryTrait for EndpointRepository {
	fn resolve(&self, chain_id: &ChainId) -> Endpoint {
		match self.endpoints.get(chain_id) {
			Some(endpoint) => endpoint.clone(),
			None => {
				tracing::debug!(
					chain_id = %chain_id,
					url = %self.default_endpoint.url,
					"Chain not configured, using default endpoint"
				);
				Endpoint::new(chain_id.clone(), self.default_endpoint.url.clone())
			}
		}
	}

	fn get(&self, chain_id: &ChainId) -> Option<Endpoint> {
		self.endpoints.get(chain_id).cloned()
	}

	fn get_all(&self) -> HashMap<ChainId, Endpoint> {
		self.endpoints.clone()
	}
}
