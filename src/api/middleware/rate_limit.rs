//! Per-client fixed window rate limiting.
//!
//! Clients are keyed by peer IP. Every response on a limited route carries
//! `X-RateLimit-Limit`, `X-RateLimit-Remaining` and `X-RateLimit-Reset` (unix
//! seconds at which the current window ends). Requests over the limit get 429.

use std::{
	collections::HashMap,
	str::FromStr,
	time::{Duration, Instant},
};

use actix_web::{
	body::{EitherBody, MessageBody},
	dev::{ServiceRequest, ServiceResponse},
	http::header::{HeaderMap, HeaderName, HeaderValue},
	middleware::Next,
	web, Error, ResponseError,
};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
	api::ApiError,
	models::RateLimitConfig,
	utils::constants::{
		RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
	},
};

/// Tracked clients before expired windows are swept
const SWEEP_THRESHOLD: usize = 10_000;

/// Outcome of a rate limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
	pub allowed: bool,
	pub limit: u32,
	pub remaining: u32,
	/// Unix timestamp when the window resets
	pub reset_at: i64,
}

impl RateLimitInfo {
	fn apply_headers(&self, headers: &mut HeaderMap) {
		let pairs = [
			(RATE_LIMIT_LIMIT_HEADER, self.limit.to_string()),
			(RATE_LIMIT_REMAINING_HEADER, self.remaining.to_string()),
			(RATE_LIMIT_RESET_HEADER, self.reset_at.to_string()),
		];
		for (name, value) in pairs {
			if let (Ok(name), Ok(value)) = (HeaderName::from_str(name), HeaderValue::from_str(&value)) {
				headers.insert(name, value);
			}
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct Window {
	started: Instant,
	count: u32,
}

/// In-memory fixed window counter per client key
#[derive(Debug)]
pub struct RateLimiter {
	config: RateLimitConfig,
	windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
	pub fn new(config: RateLimitConfig) -> Self {
		Self {
			config,
			windows: Mutex::new(HashMap::new()),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.config.enabled
	}

	/// Counts one request for `key` and reports whether it is allowed
	pub async fn check(&self, key: &str) -> RateLimitInfo {
		let now = Instant::now();
		let window_len = self.config.window;
		let mut windows = self.windows.lock().await;

		if windows.len() >= SWEEP_THRESHOLD {
			windows.retain(|_, window| now.duration_since(window.started) < window_len);
		}

		let window = windows.entry(key.to_string()).or_insert(Window {
			started: now,
			count: 0,
		});
		if now.duration_since(window.started) >= window_len {
			*window = Window {
				started: now,
				count: 0,
			};
		}

		let allowed = window.count < self.config.max_requests;
		if allowed {
			window.count += 1;
		}

		let resets_in = window_len.saturating_sub(now.duration_since(window.started));
		RateLimitInfo {
			allowed,
			limit: self.config.max_requests,
			remaining: self.config.max_requests.saturating_sub(window.count),
			reset_at: Utc::now().timestamp() + ceil_secs(resets_in),
		}
	}
}

fn ceil_secs(duration: Duration) -> i64 {
	let secs = duration.as_secs() as i64;
	if duration.subsec_nanos() > 0 {
		secs + 1
	} else {
		secs
	}
}

/// Applies the registered `RateLimiter` to every request of the wrapped scope
///
/// Passes requests through untouched when no limiter is registered or it is
/// disabled.
pub async fn enforce_rate_limit<B: MessageBody + 'static>(
	req: ServiceRequest,
	next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
	let limiter = match req.app_data::<web::Data<RateLimiter>>() {
		Some(limiter) if limiter.is_enabled() => limiter.clone(),
		_ => return next.call(req).await.map(ServiceResponse::map_into_left_body),
	};

	let client = req
		.peer_addr()
		.map(|addr| addr.ip().to_string())
		.unwrap_or_else(|| "unknown".to_string());
	let info = limiter.check(&client).await;

	if !info.allowed {
		tracing::warn!(client = %client, path = %req.path(), "Rate limit exceeded");
		let mut res = req.into_response(
			ApiError::TooManyRequests("Too many requests, please try again later".into())
				.error_response(),
		);
		info.apply_headers(res.headers_mut());
		return Ok(res.map_into_right_body());
	}

	let mut res = next.call(req).await?;
	info.apply_headers(res.headers_mut());
	Ok(res.map_into_left_body())
}
