//! HTTP transport implementation for blockchain interactions.
//!
//! A JSON-RPC client bound to a single upstream URL. The underlying
//! `ClientWithMiddleware` is cheap to clone and shares its connection pool, so
//! every transport built from the same base client reuses the same connections.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use url::Url;

use crate::services::blockchain::transports::{BlockchainTransport, TransportError};

/// Basic HTTP transport client for blockchain interactions
///
/// The client is thread-safe and can be shared across multiple tasks.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests, shared with every other transport
	client: ClientWithMiddleware,
	url: Url,
}

impl HttpTransportClient {
	/// Creates a transport for `url`
	///
	/// The URL is validated eagerly; no request is sent until the first call.
	///
	/// # Errors
	/// Returns an error when the URL cannot be parsed or is not http(s).
	pub fn new(client: ClientWithMiddleware, url: &str) -> Result<Self, anyhow::Error> {
		let url = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid RPC URL '{}': {}", url, e))?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(anyhow::anyhow!(
				"Unsupported RPC URL scheme '{}' for {}",
				url.scheme(),
				url
			));
		}
		Ok(Self { client, url })
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	fn get_current_url(&self) -> String {
		self.url.to_string()
	}

	/// Sends a JSON-RPC request and returns the raw response envelope
	///
	/// The envelope is returned as-is; JSON-RPC level errors are left to the caller.
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone,
	{
		let request_body = self.customize_request(method, params);
		let body = serde_json::to_vec(&request_body)
			.map_err(|e| TransportError::RequestSerialization(e.to_string()))?;

		let response = self
			.client
			.post(self.url.clone())
			.header("Content-Type", "application/json")
			.body(body)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			tracing::warn!(
				url = %self.url,
				method,
				status = status.as_u16(),
				"Upstream request failed"
			);
			return Err(TransportError::Http {
				status: status.as_u16(),
				url: self.url.to_string(),
				body: error_body,
			});
		}

		let bytes = response
			.bytes()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;
		serde_json::from_slice(&bytes).map_err(|e| TransportError::ResponseParse(e.to_string()))
	}
}
