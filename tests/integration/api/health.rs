use actix_web::{http::StatusCode, test, App};
use serde_json::Value;

use evm_gateway::{
	models::{Environment, RateLimitConfig},
	utils::constants::{
		RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
		REQUEST_ID_HEADER,
	},
};

use crate::integration::api::common::{create_offline_state, dev_gateway, gateway};

#[actix_web::test]
async fn test_health_is_public() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get().uri("/api/health").to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::OK);
	assert!(res.headers().contains_key(REQUEST_ID_HEADER));

	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["success"], true);
	assert_eq!(body["data"]["status"], "ok");
	assert!(body["data"]["timestamp"].is_string());
}

#[actix_web::test]
async fn test_metrics_is_public_and_not_enveloped() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get().uri("/api/metrics").to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::OK);
	let content_type = res
		.headers()
		.get("content-type")
		.unwrap()
		.to_str()
		.unwrap()
		.to_string();
	assert!(content_type.starts_with("text/plain"));
}

#[actix_web::test]
async fn test_rate_limit_rejects_after_budget() {
	let (state, _) = create_offline_state();
	let rate_limit = RateLimitConfig {
		enabled: true,
		max_requests: 2,
		window: std::time::Duration::from_secs(60),
	};
	let app = test::init_service(
		App::new().configure(gateway(state, Environment::Development, rate_limit)),
	)
	.await;

	let request = || {
		test::TestRequest::get()
			.uri("/api/health")
			.peer_addr("10.1.2.3:4000".parse().unwrap())
			.to_request()
	};

	let first = test::call_service(&app, request()).await;
	assert_eq!(first.status(), StatusCode::OK);
	assert_eq!(first.headers().get(RATE_LIMIT_LIMIT_HEADER).unwrap(), "2");
	assert_eq!(first.headers().get(RATE_LIMIT_REMAINING_HEADER).unwrap(), "1");

	let second = test::call_service(&app, request()).await;
	assert_eq!(second.status(), StatusCode::OK);
	assert_eq!(second.headers().get(RATE_LIMIT_REMAINING_HEADER).unwrap(), "0");

	let third = test::call_service(&app, request()).await;
	assert_eq!(third.status(), StatusCode::TOO_MANY_REQUESTS);
	assert!(third.headers().contains_key(RATE_LIMIT_RESET_HEADER));
	assert!(third.headers().contains_key(REQUEST_ID_HEADER));
	let body: Value = test::read_body_json(third).await;
	assert_eq!(body["success"], false);

	// Other clients keep their own budget
	let other = test::TestRequest::get()
		.uri("/api/health")
		.peer_addr("10.9.9.9:4000".parse().unwrap())
		.to_request();
	assert_eq!(test::call_service(&app, other).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_rate_limit_disabled() {
	let (state, _) = create_offline_state();
	let rate_limit = RateLimitConfig {
		enabled: false,
		max_requests: 1,
		window: std::time::Duration::from_secs(60),
	};
	let app = test::init_service(
		App::new().configure(gateway(state, Environment::Development, rate_limit)),
	)
	.await;

	for _ in 0..3 {
		let req = test::TestRequest::get().uri("/api/health").to_request();
		let res = test::call_service(&app, req).await;
		assert_eq!(res.status(), StatusCode::OK);
		assert!(!res.headers().contains_key(RATE_LIMIT_LIMIT_HEADER));
	}
}
