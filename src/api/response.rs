//! Response envelope shared by every JSON endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

/// Error member of a failed response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

/// `{success, data}` on success, `{success, error}` on failure
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
	pub fn success(data: T) -> Self {
		Self {
			success: true,
			data: Some(data),
			error: None,
		}
	}
}

impl ApiResponse<()> {
	pub fn failure(message: impl Into<String>, details: Option<String>) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(ErrorBody {
				message: message.into(),
				details,
			}),
		}
	}
}

/// 200 response wrapping `data` in the envelope
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
	HttpResponse::Ok().json(ApiResponse::success(data))
}
