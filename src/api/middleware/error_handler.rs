//! Masks server error details outside of development.

use actix_web::{
	body::{EitherBody, MessageBody},
	dev::{ServiceRequest, ServiceResponse},
	middleware::Next,
	web, Error, HttpResponse,
};

use crate::{
	api::response::ApiResponse, models::ServerConfig, utils::constants::GENERIC_ERROR_MESSAGE,
};

/// Replaces the body of every 5xx with a generic message unless the
/// configured environment exposes error details
///
/// Without a registered `ServerConfig` details are masked.
pub async fn mask_server_errors<B: MessageBody + 'static>(
	req: ServiceRequest,
	next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
	let expose_details = req
		.app_data::<web::Data<ServerConfig>>()
		.is_some_and(|config| config.environment.exposes_error_details());

	let res = next.call(req).await?;
	if expose_details || !res.status().is_server_error() {
		return Ok(res.map_into_left_body());
	}

	let status = res.status();
	let (req, original) = res.into_parts();
	if let Some(error) = original.error() {
		tracing::debug!(error = %error, "Masking server error details");
	}

	let masked = HttpResponse::build(status).json(ApiResponse::failure(GENERIC_ERROR_MESSAGE, None));
	let mut masked = ServiceResponse::new(req, masked);
	// Keep headers set by inner layers, except the now stale body metadata
	for (name, value) in original.headers() {
		if name != actix_web::http::header::CONTENT_TYPE
			&& name != actix_web::http::header::CONTENT_LENGTH
		{
			masked.headers_mut().insert(name.clone(), value.clone());
		}
	}
	Ok(masked.map_into_right_body())
}
