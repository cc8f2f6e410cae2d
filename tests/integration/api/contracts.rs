use std::sync::atomic::Ordering;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use evm_gateway::{
	models::{Environment, RateLimitConfig},
	services::blockchain::TransportError,
	utils::constants::{API_KEY_HEADER, GENERIC_ERROR_MESSAGE},
};

use crate::integration::{
	api::common::{create_offline_state, create_state, dev_gateway, gateway, API_KEY},
	mocks::{encode_uint, rpc_result, HOLDER_ADDRESS, TOKEN_ADDRESS},
};

fn balance_responder(method: &str, _params: Option<Vec<Value>>) -> Result<Value, TransportError> {
	match method {
		"eth_call" => Ok(rpc_result(json!(encode_uint(1000)))),
		other => panic!("unexpected upstream call {}", other),
	}
}

#[actix_web::test]
async fn test_missing_api_key_is_rejected() {
	let (state, constructions) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!("/api/contracts/{}", TOKEN_ADDRESS))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["success"], false);
	assert_eq!(body["error"]["message"], "API key is required");
	assert_eq!(constructions.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_wrong_api_key_is_rejected() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!("/api/contracts/{}", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, "not-the-key"))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["error"]["message"], "Invalid API key");
}

#[actix_web::test]
async fn test_get_contract_and_abi() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	for path in ["", "/abi"] {
		let req = test::TestRequest::get()
			.uri(&format!("/api/contracts/{}{}?chainId=1", TOKEN_ADDRESS, path))
			.insert_header((API_KEY_HEADER, API_KEY))
			.to_request();
		let res = test::call_service(&app, req).await;

		assert_eq!(res.status(), StatusCode::OK);
		let body: Value = test::read_body_json(res).await;
		assert_eq!(body["success"], true);
		assert_eq!(body["data"]["chainId"], "1");
		assert_eq!(
			body["data"]["address"].as_str().unwrap().to_lowercase(),
			TOKEN_ADDRESS
		);
		let abi = body["data"]["abi"].as_array().unwrap();
		assert_eq!(abi.len(), 11);
		assert!(abi.contains(&json!("function balanceOf(address) view returns (uint256)")));
	}
}

#[actix_web::test]
async fn test_get_contract_without_chain_uses_default() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!("/api/contracts/{}", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["chainId"], "default");
}

#[actix_web::test]
async fn test_get_contract_invalid_address() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri("/api/contracts/0x1234")
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["success"], false);
	assert_eq!(body["error"]["details"], "InvalidInput");
}

#[actix_web::test]
async fn test_call_balance_of() {
	let (state, constructions) = create_state(balance_responder);
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!(
			"/api/contracts/{}/call/balanceOf?chainId=137&args=%5B%22{}%22%5D",
			TOKEN_ADDRESS, HOLDER_ADDRESS
		))
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::OK);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["data"]["functionName"], "balanceOf");
	assert_eq!(body["data"]["address"], TOKEN_ADDRESS);
	assert_eq!(body["data"]["result"], "1000");
	assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_call_unknown_function() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!("/api/contracts/{}/call/mint", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["error"]["message"], "Function mint not found in contract");
}

#[actix_web::test]
async fn test_call_with_malformed_args() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::get()
		.uri(&format!(
			"/api/contracts/{}/call/balanceOf?args=notjson",
			TOKEN_ADDRESS
		))
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;
	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_upstream_failure_details_depend_on_environment() {
	let failing = |_: &str, _: Option<Vec<Value>>| -> Result<Value, TransportError> {
		Err(TransportError::Network("connection refused by 10.0.0.7".into()))
	};
	let uri = format!(
		"/api/contracts/{}/call/totalSupply?chainId=1",
		TOKEN_ADDRESS
	);

	let (state, _) = create_state(failing);
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;
	let req = test::TestRequest::get()
		.uri(&uri)
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;
	assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body: Value = test::read_body_json(res).await;
	assert!(body["error"]["message"]
		.as_str()
		.unwrap()
		.contains("connection refused"));
	assert_eq!(body["error"]["details"], "UpstreamError");

	let (state, _) = create_state(failing);
	let app = test::init_service(App::new().configure(gateway(
		state,
		Environment::Production,
		RateLimitConfig::default(),
	)))
	.await;
	let req = test::TestRequest::get()
		.uri(&uri)
		.insert_header((API_KEY_HEADER, API_KEY))
		.to_request();
	let res = test::call_service(&app, req).await;
	assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["error"]["message"], GENERIC_ERROR_MESSAGE);
	assert!(body["error"].get("details").is_none());
}

#[actix_web::test]
async fn test_prepare_transaction() {
	let (state, constructions) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::post()
		.uri(&format!("/api/contracts/{}/prepare-tx/transfer", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, API_KEY))
		.set_json(json!({ "args": [HOLDER_ADDRESS, "1000"] }))
		.to_request();
	let res = test::call_service(&app, req).await;

	assert_eq!(res.status(), StatusCode::OK);
	let body: Value = test::read_body_json(res).await;
	let tx = &body["data"]["txData"];
	assert!(tx["data"].as_str().unwrap().starts_with("0xa9059cbb"));
	assert_eq!(tx["value"], "0x0");
	assert_eq!(tx["chainId"], "1");
	assert_eq!(tx["to"].as_str().unwrap().to_lowercase(), TOKEN_ADDRESS);
	assert_eq!(body["data"]["functionName"], "transfer");
	assert_eq!(body["data"]["args"], json!([HOLDER_ADDRESS, "1000"]));
	// Preparing never contacts a node
	assert_eq!(constructions.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_prepare_transaction_with_chain_and_value() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let req = test::TestRequest::post()
		.uri(&format!(
			"/api/contracts/{}/prepare-tx/approve?chainId=137",
			TOKEN_ADDRESS
		))
		.insert_header((API_KEY_HEADER, API_KEY))
		.set_json(json!({ "args": [HOLDER_ADDRESS, "5"], "value": "16" }))
		.to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;

	assert_eq!(body["data"]["txData"]["chainId"], "137");
	assert_eq!(body["data"]["txData"]["value"], "0x10");
}

#[actix_web::test]
async fn test_prepare_transaction_errors() {
	let (state, _) = create_offline_state();
	let app = test::init_service(App::new().configure(dev_gateway(state))).await;

	let unknown = test::TestRequest::post()
		.uri(&format!("/api/contracts/{}/prepare-tx/mint", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, API_KEY))
		.set_json(json!({ "args": [] }))
		.to_request();
	assert_eq!(
		test::call_service(&app, unknown).await.status(),
		StatusCode::BAD_REQUEST
	);

	let malformed = test::TestRequest::post()
		.uri(&format!("/api/contracts/{}/prepare-tx/transfer", TOKEN_ADDRESS))
		.insert_header((API_KEY_HEADER, API_KEY))
		.insert_header(("content-type", "application/json"))
		.set_payload("{\"args\": [")
		.to_request();
	let res = test::call_service(&app, malformed).await;
	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	let body: Value = test::read_body_json(res).await;
	assert_eq!(body["success"], false);
}
