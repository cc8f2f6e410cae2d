//! Blockchain error types and handling.
//!
//! Errors raised by chain clients and the client pool. Each variant maps to one
//! HTTP status class at the API boundary: invalid input (400), not found (404)
//! and everything else (500).

use log::error;

use crate::services::blockchain::transports::TransportError;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// Malformed address, hash, function name or arguments supplied by the caller
	InvalidInput(String),

	/// The requested transaction or receipt does not exist on chain
	NotFound(String),

	/// The upstream node failed, returned a JSON-RPC error or an unparseable response
	UpstreamError(String),

	/// A client for the chain could not be constructed
	ConnectionError(String),

	/// Internal errors within the blockchain client
	InternalError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::InvalidInput(msg) => format!("Invalid input: {}", msg),
			Self::NotFound(msg) => format!("Not found: {}", msg),
			Self::UpstreamError(msg) => format!("Upstream error: {}", msg),
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// The message without the kind prefix
	pub fn message(&self) -> &str {
		match self {
			Self::InvalidInput(msg)
			| Self::NotFound(msg)
			| Self::UpstreamError(msg)
			| Self::ConnectionError(msg)
			| Self::InternalError(msg) => msg,
		}
	}

	/// Short, stable name of the error kind
	pub fn kind(&self) -> &'static str {
		match self {
			Self::InvalidInput(_) => "InvalidInput",
			Self::NotFound(_) => "NotFound",
			Self::UpstreamError(_) => "UpstreamError",
			Self::ConnectionError(_) => "ConnectionError",
			Self::InternalError(_) => "InternalError",
		}
	}

	/// Creates a new invalid input error with logging
	pub fn invalid_input(msg: impl Into<String>) -> Self {
		let error = Self::InvalidInput(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new not found error with logging
	pub fn not_found(msg: impl Into<String>) -> Self {
		let error = Self::NotFound(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new upstream error with logging
	pub fn upstream_error(msg: impl Into<String>) -> Self {
		let error = Self::UpstreamError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

/// Every transport failure is an upstream failure
impl From<TransportError> for BlockChainError {
	fn from(err: TransportError) -> Self {
		Self::upstream_error(err.to_string())
	}
}
