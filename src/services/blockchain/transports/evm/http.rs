//! EVM transport implementation for blockchain interactions.
//!
//! This module provides a client implementation for interacting with EVM-compatible nodes
//! by wrapping the HttpTransportClient. On top of the plain HTTP transport it
//! records per-chain request and error metrics.

use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;

use crate::{
	models::Endpoint,
	services::blockchain::transports::{BlockchainTransport, HttpTransportClient, TransportError},
	utils::metrics::{record_upstream_error, record_upstream_request},
};

/// A client for interacting with EVM-compatible blockchain nodes
#[derive(Clone, Debug)]
pub struct EVMTransportClient {
	/// The underlying HTTP transport client that handles actual RPC communications
	http_client: HttpTransportClient,
	/// Metric label for the chain this transport serves
	chain: String,
}

impl EVMTransportClient {
	/// Creates a new EVM transport client bound to `endpoint`
	///
	/// # Arguments
	/// * `client` - Shared HTTP client (connection pool and retry middleware)
	/// * `endpoint` - Chain id and RPC URL
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - A new client instance or a URL validation error
	pub fn new(client: ClientWithMiddleware, endpoint: &Endpoint) -> Result<Self, anyhow::Error> {
		let http_client = HttpTransportClient::new(client, &endpoint.url)?;
		Ok(Self {
			http_client,
			chain: endpoint.chain_id.to_string(),
		})
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for EVMTransportClient {
	fn get_current_url(&self) -> String {
		self.http_client.get_current_url()
	}

	/// Sends a raw JSON-RPC request to the EVM node
	///
	/// Responses carrying a JSON-RPC `error` object are counted as failures.
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone,
	{
		record_upstream_request(&self.chain, method);
		let result = self.http_client.send_raw_request(method, params).await;
		match &result {
			Ok(response) if response.get("error").is_some() => {
				record_upstream_error(&self.chain, method)
			}
			Err(_) => record_upstream_error(&self.chain, method),
			Ok(_) => {}
		}
		result
	}
}
