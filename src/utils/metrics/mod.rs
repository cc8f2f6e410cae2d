//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines specific metrics for the application.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Counter of JSON-RPC requests sent upstream, per chain and method.
	pub static ref UPSTREAM_REQUESTS_TOTAL: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("upstream_requests_total", "JSON-RPC requests sent to upstream nodes"),
			&["chain", "method"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter of failed upstream requests (transport failures and JSON-RPC errors).
	pub static ref UPSTREAM_ERRORS_TOTAL: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("upstream_errors_total", "Failed JSON-RPC requests to upstream nodes"),
			&["chain", "method"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Gauge for the number of cached chain clients.
	pub static ref CLIENT_POOL_SIZE: IntGauge = {
		let gauge = IntGauge::new("client_pool_size", "Number of cached chain clients").unwrap();
		REGISTRY.register(Box::new(gauge.clone())).unwrap();
		gauge
	};

	// Counter of chain client constructions, per chain.
	pub static ref CLIENT_CONSTRUCTIONS_TOTAL: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("client_constructions_total", "Chain clients constructed by the client pool"),
			&["chain"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}

/// Content type of the text exposition format
pub fn metrics_content_type() -> String {
	TextEncoder::new().format_type().to_string()
}

pub fn record_upstream_request(chain: &str, method: &str) {
	UPSTREAM_REQUESTS_TOTAL
		.with_label_values(&[chain, method])
		.inc();
}

pub fn record_upstream_error(chain: &str, method: &str) {
	UPSTREAM_ERRORS_TOTAL
		.with_label_values(&[chain, method])
		.inc();
}

pub fn record_client_construction(chain: &str) {
	CLIENT_CONSTRUCTIONS_TOTAL.with_label_values(&[chain]).inc();
}

pub fn set_client_pool_size(size: usize) {
	CLIENT_POOL_SIZE.set(size as i64);
}
