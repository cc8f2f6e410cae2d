use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

use crate::api::response::ok;

/// Liveness probe, never touches upstream nodes
pub async fn health() -> HttpResponse {
	ok(json!({
		"status": "ok",
		"timestamp": Utc::now().to_rfc3339(),
	}))
}
