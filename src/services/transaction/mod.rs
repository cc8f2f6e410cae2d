//! Transaction use cases: receipt lookup, status derivation and gas estimation.

use std::sync::Arc;

use crate::{
	models::{ChainId, EVMCallRequest, EVMTransactionReceipt, TransactionStatusView},
	services::blockchain::{
		parse_transaction_hash, BlockChainClient, BlockChainError, ClientPoolTrait, EvmClientTrait,
	},
};

/// Transaction operations routed through the client pool
pub struct TransactionService<P: ClientPoolTrait> {
	pool: Arc<P>,
}

impl<P: ClientPoolTrait> TransactionService<P> {
	pub fn new(pool: Arc<P>) -> Self {
		Self { pool }
	}

	/// Returns the receipt of a mined transaction
	///
	/// # Errors
	/// - `InvalidInput` for malformed hashes
	/// - `NotFound` when the node has no receipt (unknown or still pending)
	pub async fn get_transaction_receipt(
		&self,
		hash: &str,
		chain_id: &ChainId,
	) -> Result<EVMTransactionReceipt, BlockChainError> {
		let result: Result<EVMTransactionReceipt, BlockChainError> = async {
			let parsed = parse_transaction_hash(hash)?;
			let client = self.pool.get_evm_client(chain_id).await?;
			client
				.get_transaction_receipt(parsed)
				.await?
				.ok_or_else(|| BlockChainError::not_found(format!("Transaction {} not found", hash)))
		}
		.await;

		result.inspect_err(|e| {
			tracing::error!(hash, chain_id = %chain_id, error = %e, "Failed to get transaction receipt")
		})
	}

	pub async fn get_transaction_status(
		&self,
		hash: &str,
		chain_id: &ChainId,
	) -> Result<TransactionStatusView, BlockChainError> {
		let result: Result<TransactionStatusView, BlockChainError> = async {
			let client = self.pool.get_evm_client(chain_id).await?;
			client.get_transaction_status(hash).await
		}
		.await;

		result.inspect_err(|e| {
			tracing::error!(hash, chain_id = %chain_id, error = %e, "Failed to get transaction status")
		})
	}

	/// Estimates gas for `request`, returned as a decimal string
	pub async fn estimate_gas(
		&self,
		request: &EVMCallRequest,
		chain_id: &ChainId,
	) -> Result<String, BlockChainError> {
		let result: Result<u64, BlockChainError> = async {
			let client = self.pool.get_evm_client(chain_id).await?;
			client.estimate_gas(request).await
		}
		.await;

		result.map(|gas| gas.to_string()).inspect_err(|e| {
			tracing::error!(
				to = %request.to,
				chain_id = %chain_id,
				error = %e,
				"Failed to estimate gas"
			)
		})
	}
}
