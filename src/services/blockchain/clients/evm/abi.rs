//! Input validation and ABI conversion helpers for EVM clients.
//!
//! Arguments arrive as JSON values and are coerced to the function's input
//! types; decoded outputs are rendered back to JSON with integers as decimal
//! strings, addresses checksummed and byte strings hex-encoded.

use std::str::FromStr;

use alloy::{
	dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt},
	hex,
	json_abi::{Function, StateMutability},
	primitives::{Address, Bytes, B256},
};
use serde_json::Value;

use crate::services::blockchain::BlockChainError;

/// Parses a `0x`-prefixed 20-byte address
///
/// All-lowercase and all-uppercase addresses are accepted as-is; mixed-case
/// input must carry a valid EIP-55 checksum.
pub fn parse_address(address: &str) -> Result<Address, BlockChainError> {
	let hex_part = address
		.strip_prefix("0x")
		.filter(|rest| rest.len() == 40 && rest.chars().all(|c| c.is_ascii_hexdigit()))
		.ok_or_else(|| {
			BlockChainError::invalid_input(format!("Invalid contract address: {}", address))
		})?;

	let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
	let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
	let parsed = if has_lower && has_upper {
		Address::parse_checksummed(address, None).map_err(|_| {
			BlockChainError::invalid_input(format!("Invalid address checksum: {}", address))
		})?
	} else {
		Address::from_str(address).map_err(|e| {
			BlockChainError::invalid_input(format!("Invalid contract address {}: {}", address, e))
		})?
	};
	Ok(parsed)
}

/// Parses a `0x`-prefixed 32-byte transaction hash
pub fn parse_transaction_hash(hash: &str) -> Result<B256, BlockChainError> {
	let valid = hash
		.strip_prefix("0x")
		.is_some_and(|rest| rest.len() == 64 && rest.chars().all(|c| c.is_ascii_hexdigit()));
	if !valid {
		return Err(BlockChainError::invalid_input(format!(
			"Invalid transaction hash: {}",
			hash
		)));
	}
	B256::from_str(hash).map_err(|e| {
		BlockChainError::invalid_input(format!("Invalid transaction hash {}: {}", hash, e))
	})
}

/// Whether calling the function leaves chain state untouched
pub fn is_read_only(function: &Function) -> bool {
	matches!(
		function.state_mutability,
		StateMutability::Pure | StateMutability::View
	)
}

/// ABI-encodes a call to `function` (selector followed by the arguments)
pub fn encode_function_call(function: &Function, args: &[Value]) -> Result<Bytes, BlockChainError> {
	if function.inputs.len() != args.len() {
		return Err(BlockChainError::invalid_input(format!(
			"Function {} expects {} argument(s), got {}",
			function.name,
			function.inputs.len(),
			args.len()
		)));
	}

	let values = function
		.inputs
		.iter()
		.zip(args)
		.enumerate()
		.map(|(index, (param, arg))| {
			let ty = DynSolType::parse(&param.selector_type()).map_err(|e| {
				BlockChainError::internal_error(format!(
					"Unsupported parameter type {}: {}",
					param.selector_type(),
					e
				))
			})?;
			json_to_sol(&ty, arg).map_err(|e| {
				BlockChainError::invalid_input(format!(
					"Invalid argument {} for {}: expected {}, {}",
					index,
					function.name,
					ty,
					e
				))
			})
		})
		.collect::<Result<Vec<_>, _>>()?;

	function
		.abi_encode_input(&values)
		.map(Bytes::from)
		.map_err(|e| {
			BlockChainError::invalid_input(format!(
				"Failed to encode call to {}: {}",
				function.name, e
			))
		})
}

/// Decodes the return data of `function`
///
/// A single output is returned bare, several outputs as an array, none as null.
pub fn decode_function_output(function: &Function, data: &[u8]) -> Result<Value, BlockChainError> {
	let mut outputs = function.abi_decode_output(data).map_err(|e| {
		BlockChainError::upstream_error(format!(
			"Failed to decode result of {}: {}",
			function.name, e
		))
	})?;

	Ok(match outputs.len() {
		0 => Value::Null,
		1 => sol_to_json(&outputs.remove(0)),
		_ => Value::Array(outputs.iter().map(sol_to_json).collect()),
	})
}

fn json_to_sol(ty: &DynSolType, value: &Value) -> Result<DynSolValue, String> {
	match (ty, value) {
		(DynSolType::Array(inner), Value::Array(items)) => items
			.iter()
			.map(|item| json_to_sol(inner, item))
			.collect::<Result<Vec<_>, _>>()
			.map(DynSolValue::Array),
		(DynSolType::FixedArray(inner, len), Value::Array(items)) => {
			if items.len() != *len {
				return Err(format!("expected {} elements, got {}", len, items.len()));
			}
			items
				.iter()
				.map(|item| json_to_sol(inner, item))
				.collect::<Result<Vec<_>, _>>()
				.map(DynSolValue::FixedArray)
		}
		(DynSolType::Tuple(types), Value::Array(items)) => {
			if items.len() != types.len() {
				return Err(format!(
					"expected {} tuple fields, got {}",
					types.len(),
					items.len()
				));
			}
			types
				.iter()
				.zip(items)
				.map(|(ty, item)| json_to_sol(ty, item))
				.collect::<Result<Vec<_>, _>>()
				.map(DynSolValue::Tuple)
		}
		(_, Value::String(text)) => ty.coerce_str(text).map_err(|e| e.to_string()),
		(_, Value::Null) => Err("null is not a valid argument".to_string()),
		(_, other) => ty.coerce_str(&other.to_string()).map_err(|e| e.to_string()),
	}
}

#[allow(unreachable_patterns)]
fn sol_to_json(value: &DynSolValue) -> Value {
	match value {
		DynSolValue::Bool(b) => Value::Bool(*b),
		DynSolValue::Int(i, _) => Value::String(i.to_string()),
		DynSolValue::Uint(u, _) => Value::String(u.to_string()),
		DynSolValue::FixedBytes(word, size) => Value::String(hex::encode_prefixed(&word[..*size])),
		DynSolValue::Address(address) => Value::String(address.to_checksum(None)),
		DynSolValue::Function(function) => Value::String(function.to_string()),
		DynSolValue::Bytes(bytes) => Value::String(hex::encode_prefixed(bytes)),
		DynSolValue::String(text) => Value::String(text.clone()),
		DynSolValue::Array(items) | DynSolValue::FixedArray(items) | DynSolValue::Tuple(items) => {
			Value::Array(items.iter().map(sol_to_json).collect())
		}
		other => other
			.as_fixed_seq()
			.map(|items| Value::Array(items.iter().map(sol_to_json).collect()))
			.unwrap_or(Value::Null),
	}
}
