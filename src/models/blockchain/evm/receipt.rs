//! EVM transaction receipt data structures.

use alloy::primitives::{Address, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Receipt object as returned by `eth_getTransactionReceipt`
///
/// Logs are kept as raw JSON values. Fields without a typed counterpart (`logsBloom`,
/// `type`, chain-specific extensions) are carried in `extra`, so the receipt is
/// forwarded to clients as the node returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	pub transaction_hash: B256,
	#[serde(default)]
	pub transaction_index: Option<U64>,
	#[serde(default)]
	pub block_hash: Option<B256>,
	#[serde(default)]
	pub block_number: Option<U64>,
	pub from: Address,
	#[serde(default)]
	pub to: Option<Address>,
	/// Address of the created contract, for deployments
	#[serde(default)]
	pub contract_address: Option<Address>,
	#[serde(default)]
	pub cumulative_gas_used: Option<U256>,
	/// Gas consumed by this transaction
	pub gas_used: U256,
	/// Price per gas actually paid. Older nodes omit it.
	#[serde(default)]
	pub effective_gas_price: Option<U256>,
	/// `1` for success, `0` for failure. Pre-Byzantium receipts carry a state root instead.
	#[serde(default)]
	pub status: Option<U64>,
	#[serde(default)]
	pub logs: Vec<serde_json::Value>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TransactionReceipt {
	/// Whether the receipt reports successful execution
	///
	/// Receipts without a status flag are treated as failed.
	pub fn is_success(&self) -> bool {
		self.status
			.map(|status| status.to::<u64>() == 1)
			.unwrap_or(false)
	}
}
