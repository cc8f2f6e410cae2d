//! Transaction routes: receipts, derived status and gas estimation.

use std::str::FromStr;

use actix_web::{web, HttpResponse};
use alloy::primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
	api::{
		handlers::{contracts::value_as_string, ChainQuery},
		response::ok,
		ApiError, AppState,
	},
	models::{ChainId, EVMCallRequest},
	services::blockchain::{parse_address, ClientPoolTrait},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateGasBody {
	#[serde(default)]
	pub to: Option<String>,
	#[serde(default)]
	pub data: Option<String>,
	#[serde(default)]
	pub value: Option<Value>,
	#[serde(default)]
	pub from: Option<String>,
	#[serde(default)]
	pub chain_id: Option<ChainId>,
}

impl EstimateGasBody {
	fn to_call_request(&self) -> Result<EVMCallRequest, ApiError> {
		let (Some(to), Some(data)) = (non_blank(&self.to), non_blank(&self.data)) else {
			return Err(ApiError::InvalidInput(
				"Transaction recipient and data are required".to_string(),
			));
		};

		let to = parse_address(to)?;
		let from = self.from.as_deref().map(parse_address).transpose()?;
		let data = Bytes::from_str(data)
			.map_err(|e| ApiError::InvalidInput(format!("Invalid call data {}: {}", data, e)))?;

		let value = value_as_string(self.value.clone())?
			.map(|raw| {
				U256::from_str(raw.trim()).map_err(|e| {
					ApiError::InvalidInput(format!("Invalid transaction value {}: {}", raw, e))
				})
			})
			.transpose()?;

		Ok(EVMCallRequest {
			from,
			to,
			data,
			value,
		})
	}
}

fn non_blank(field: &Option<String>) -> Option<&str> {
	field
		.as_deref()
		.map(str::trim)
		.filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GasEstimate<'a> {
	gas_estimate: String,
	tx: &'a EVMCallRequest,
}

/// GET /api/transactions/{txHash}
pub async fn get_receipt<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	path: web::Path<String>,
	query: web::Query<ChainQuery>,
) -> Result<HttpResponse, ApiError> {
	let receipt = state
		.transaction_service
		.get_transaction_receipt(&path, &query.chain_id())
		.await?;
	Ok(ok(receipt))
}

/// GET /api/transactions/{txHash}/status
pub async fn get_status<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	path: web::Path<String>,
	query: web::Query<ChainQuery>,
) -> Result<HttpResponse, ApiError> {
	let status = state
		.transaction_service
		.get_transaction_status(&path, &query.chain_id())
		.await?;
	Ok(ok(status))
}

/// POST /api/transactions/estimate-gas
pub async fn estimate_gas<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	body: web::Json<EstimateGasBody>,
) -> Result<HttpResponse, ApiError> {
	let request = body.to_call_request()?;
	let chain_id = body.chain_id.clone().unwrap_or_default();

	let gas_estimate = state
		.transaction_service
		.estimate_gas(&request, &chain_id)
		.await?;

	Ok(ok(GasEstimate {
		gas_estimate,
		tx: &request,
	}))
}
