//! EVM transaction data structures.

use alloy::primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Transaction object as returned by `eth_getTransactionByHash`
///
/// Only the fields the gateway reads are modelled. Fields that are absent for
/// pending transactions (block hash, block number) are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Transaction hash
	pub hash: B256,
	/// Sender address
	pub from: Address,
	/// Recipient address (None for contract creation)
	#[serde(default)]
	pub to: Option<Address>,
	/// Amount of native currency transferred, in wei
	pub value: U256,
	/// Block the transaction was mined in, None while pending
	#[serde(default)]
	pub block_number: Option<U64>,
	/// Hash of the block the transaction was mined in
	#[serde(default)]
	pub block_hash: Option<B256>,
	#[serde(default)]
	pub nonce: Option<U64>,
	/// Gas limit
	#[serde(default)]
	pub gas: Option<U256>,
	/// Gas price (legacy transactions and some nodes for EIP-1559)
	#[serde(default)]
	pub gas_price: Option<U256>,
	/// Call data
	#[serde(default)]
	pub input: Bytes,
}

impl Transaction {
	/// Get the block number as a plain integer, if the transaction is mined
	pub fn block_number(&self) -> Option<u64> {
		self.block_number.map(|number| number.to::<u64>())
	}

	/// Whether the transaction has been included in a block
	pub fn is_mined(&self) -> bool {
		self.block_number.is_some()
	}
}
