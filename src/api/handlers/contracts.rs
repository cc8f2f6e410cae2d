//! Contract routes: descriptor lookup, read-only calls and unsigned transaction
//! preparation.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
	api::{handlers::ChainQuery, response::ok, ApiError, AppState},
	models::{ChainId, ContractDescriptor, InterfaceDescriptor, PreparedTransaction},
	services::blockchain::ClientPoolTrait,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContractView<'a> {
	address: String,
	chain_id: &'a ChainId,
	abi: &'a InterfaceDescriptor,
}

impl<'a> From<&'a ContractDescriptor> for ContractView<'a> {
	fn from(contract: &'a ContractDescriptor) -> Self {
		Self {
			address: contract.address.to_checksum(None),
			chain_id: &contract.chain_id,
			abi: &contract.interface,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQuery {
	pub chain_id: Option<String>,
	/// JSON array of call arguments
	pub args: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrepareTxBody {
	#[serde(default)]
	pub args: Vec<Value>,
	#[serde(default)]
	pub value: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallResult<'a> {
	address: &'a str,
	function_name: &'a str,
	result: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrepareTxResult<'a> {
	tx_data: PreparedTransaction,
	function_name: &'a str,
	args: &'a [Value],
}

/// GET /api/contracts/{address} and GET /api/contracts/{address}/abi
pub async fn get_contract<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	path: web::Path<String>,
	query: web::Query<ChainQuery>,
) -> Result<HttpResponse, ApiError> {
	let contract = state
		.contract_service
		.get_contract(&path, &query.chain_id())
		.await?;
	Ok(ok(ContractView::from(&contract)))
}

/// GET /api/contracts/{address}/call/{functionName}
pub async fn call_function<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	path: web::Path<(String, String)>,
	query: web::Query<CallQuery>,
) -> Result<HttpResponse, ApiError> {
	let (address, function_name) = path.into_inner();
	let args = parse_args(query.args.as_deref())?;
	let chain_id = ChainId::from_optional(query.chain_id.as_deref());

	let result = state
		.contract_service
		.call_function(&address, &function_name, &args, &chain_id)
		.await?;

	Ok(ok(CallResult {
		address: &address,
		function_name: &function_name,
		result,
	}))
}

/// POST /api/contracts/{address}/prepare-tx/{functionName}
pub async fn prepare_transaction<P: ClientPoolTrait + 'static>(
	state: web::Data<AppState<P>>,
	path: web::Path<(String, String)>,
	query: web::Query<ChainQuery>,
	body: web::Json<PrepareTxBody>,
) -> Result<HttpResponse, ApiError> {
	let (address, function_name) = path.into_inner();
	let PrepareTxBody { args, value } = body.into_inner();
	let value = value_as_string(value)?;

	let tx_data = state
		.contract_service
		.prepare_transaction(
			&address,
			&function_name,
			&args,
			value.as_deref(),
			query.chain_id.as_deref(),
		)
		.await?;

	Ok(ok(PrepareTxResult {
		tx_data,
		function_name: &function_name,
		args: &args,
	}))
}

/// Parses the `args` query parameter; absent or blank means no arguments
fn parse_args(raw: Option<&str>) -> Result<Vec<Value>, ApiError> {
	let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
		return Ok(Vec::new());
	};
	match serde_json::from_str::<Value>(raw) {
		Ok(Value::Array(args)) => Ok(args),
		_ => Err(ApiError::InvalidInput(
			"Query parameter 'args' must be a JSON array".into(),
		)),
	}
}

/// Accepts a wei amount given as a JSON string or number
pub(crate) fn value_as_string(value: Option<Value>) -> Result<Option<String>, ApiError> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(value)) => Ok(Some(value)),
		Some(Value::Number(value)) if value.is_u64() => Ok(Some(value.to_string())),
		Some(other) => Err(ApiError::InvalidInput(format!(
			"Invalid transaction value {}",
			other
		))),
	}
}
