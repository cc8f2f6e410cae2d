//! Prometheus scrape endpoint.

use actix_web::{HttpResponse, Responder};
use tracing::error;

use crate::utils::metrics::{gather_metrics, metrics_content_type};

/// Metrics endpoint handler, served in the text exposition format
pub async fn metrics() -> impl Responder {
	match gather_metrics() {
		Ok(buffer) => HttpResponse::Ok()
			.content_type(metrics_content_type())
			.body(buffer),
		Err(e) => {
			error!("Error gathering metrics: {}", e);
			HttpResponse::InternalServerError().finish()
		}
	}
}
