use alloy::primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a transaction as seen by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
	/// Not yet mined, or mined but the receipt is not available yet
	Pending,
	Success,
	Failed,
}

/// Summary of a transaction's status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusView {
	pub hash: B256,
	pub status: TransactionStatus,
	pub block_number: Option<u64>,
	/// Number of blocks including and on top of the transaction's block
	pub confirmations: u64,
	pub from: Address,
	pub to: Option<Address>,
	/// Transferred value in wei, as a decimal string
	pub value: String,
	pub gas_used: Option<String>,
	pub effective_gas_price: Option<String>,
}

/// Unsigned transaction payload returned to the caller for signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransaction {
	pub to: Address,
	pub data: Bytes,
	pub value: String,
	pub chain_id: String,
}
