//! API key authentication for protected routes.

use actix_web::{
	body::{EitherBody, MessageBody},
	dev::{ServiceRequest, ServiceResponse},
	middleware::Next,
	web, Error, ResponseError,
};

use crate::{api::ApiError, models::ServerConfig, utils::constants::API_KEY_HEADER};

/// Rejects requests whose `X-API-KEY` header does not match the configured key
///
/// Missing keys yield 401 "API key is required", wrong keys 401 "Invalid API key".
/// The presented key is never logged.
pub async fn require_api_key<B: MessageBody + 'static>(
	req: ServiceRequest,
	next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
	let expected = req
		.app_data::<web::Data<ServerConfig>>()
		.map(|config| config.api_key.clone());
	let provided = req
		.headers()
		.get(API_KEY_HEADER)
		.and_then(|value| value.to_str().ok())
		.filter(|value| !value.is_empty());

	let rejection = match (provided, expected.as_deref()) {
		(None, _) => Some(ApiError::Unauthorized("API key is required".into())),
		(Some(provided), Some(expected)) if keys_match(provided, expected) => None,
		_ => {
			tracing::warn!(
				method = %req.method(),
				path = %req.path(),
				peer = ?req.peer_addr(),
				"Rejected request with invalid API key"
			);
			Some(ApiError::Unauthorized("Invalid API key".into()))
		}
	};

	match rejection {
		None => next.call(req).await.map(ServiceResponse::map_into_left_body),
		Some(error) => Ok(req
			.into_response(error.error_response())
			.map_into_right_body()),
	}
}

/// Compares without short-circuiting on the first differing byte
fn keys_match(provided: &str, expected: &str) -> bool {
	let (a, b) = (provided.as_bytes(), expected.as_bytes());
	if a.len() != b.len() {
		return false;
	}
	a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
