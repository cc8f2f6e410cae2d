//! HTTP error type and its rendering into the response envelope.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{api::response::ApiResponse, services::blockchain::BlockChainError};

/// Errors surfaced by handlers and middleware
///
/// Rendering always includes the error kind as `details`. Server errors are
/// masked afterwards by the `mask_server_errors` middleware when the
/// environment does not expose details.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{0}")]
	InvalidInput(String),

	#[error("{0}")]
	NotFound(String),

	#[error("{0}")]
	Unauthorized(String),

	#[error("{0}")]
	TooManyRequests(String),

	#[error("{message}")]
	Internal { kind: &'static str, message: String },
}

impl ApiError {
	pub fn kind(&self) -> &'static str {
		match self {
			Self::InvalidInput(_) => "InvalidInput",
			Self::NotFound(_) => "NotFound",
			Self::Unauthorized(_) => "Unauthorized",
			Self::TooManyRequests(_) => "TooManyRequests",
			Self::Internal { kind, .. } => kind,
		}
	}
}

impl From<BlockChainError> for ApiError {
	fn from(error: BlockChainError) -> Self {
		match error {
			BlockChainError::InvalidInput(msg) => Self::InvalidInput(msg),
			BlockChainError::NotFound(msg) => Self::NotFound(msg),
			other => Self::Internal {
				kind: other.kind(),
				message: other.message().to_string(),
			},
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
			Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
			Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ApiResponse::failure(
			self.to_string(),
			Some(self.kind().to_string()),
		))
	}
}
