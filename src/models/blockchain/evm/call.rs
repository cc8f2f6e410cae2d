//! Call request used by `eth_call` and `eth_estimateGas`.

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Transaction-like call object sent to the node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from: Option<Address>,
	pub to: Address,
	#[serde(default)]
	pub data: Bytes,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<U256>,
}

impl CallRequest {
	/// Creates a call to `to` with the given calldata
	pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
		Self {
			to,
			data: data.into(),
			..Default::default()
		}
	}
}
