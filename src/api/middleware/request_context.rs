//! Request id propagation and access logging.

use std::{str::FromStr, time::Instant};

use actix_web::{
	body::MessageBody,
	dev::{ServiceRequest, ServiceResponse},
	http::header::{HeaderName, HeaderValue},
	middleware::Next,
	Error,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::utils::constants::REQUEST_ID_HEADER;

const MAX_REQUEST_ID_LEN: usize = 128;

/// Tags the request with an id and logs its outcome
///
/// A client supplied `X-Request-Id` is reused when it is short and printable,
/// otherwise a fresh uuid v4 is generated. The id is echoed on the response.
pub async fn request_context<B: MessageBody + 'static>(
	req: ServiceRequest,
	next: Next<B>,
) -> Result<ServiceResponse<B>, Error> {
	let request_id = req
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
		.map(str::to_string)
		.unwrap_or_else(|| Uuid::new_v4().to_string());

	let method = req.method().to_string();
	let path = req.path().to_string();
	let span = tracing::info_span!("request", request_id = %request_id, method = %method, path = %path);
	let started = Instant::now();

	let mut res = next.call(req).instrument(span.clone()).await?;

	if let (Ok(name), Ok(value)) = (
		HeaderName::from_str(REQUEST_ID_HEADER),
		HeaderValue::from_str(&request_id),
	) {
		res.headers_mut().insert(name, value);
	}

	let status = res.status().as_u16();
	let latency_ms = started.elapsed().as_millis() as u64;
	span.in_scope(|| {
		if res.status().is_server_error() {
			tracing::error!(status, latency_ms, "Request failed");
		} else {
			tracing::info!(status, latency_ms, "Request completed");
		}
	});

	Ok(res)
}
