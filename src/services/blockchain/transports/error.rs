//! Transport-level errors.

use thiserror::Error;

/// Errors raised while exchanging a JSON-RPC message with an upstream node
#[derive(Debug, Error)]
pub enum TransportError {
	/// The node answered with a non-success HTTP status
	#[error("HTTP {status} from {url}: {body}")]
	Http {
		status: u16,
		url: String,
		body: String,
	},

	/// The request never produced a response (DNS, connect, timeout, reset)
	#[error("Network error: {0}")]
	Network(String),

	/// The response body was not valid JSON
	#[error("Failed to parse response: {0}")]
	ResponseParse(String),

	#[error("Failed to serialize request: {0}")]
	RequestSerialization(String),
}

impl From<reqwest_middleware::Error> for TransportError {
	fn from(err: reqwest_middleware::Error) -> Self {
		Self::Network(err.to_string())
	}
}
