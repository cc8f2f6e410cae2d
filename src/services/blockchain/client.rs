//! Core blockchain client interface.
//!
//! This module defines the capability set every chain client offers. Higher
//! level operations (contract reads, transaction status) are built on top of it
//! in `EvmClientTrait`, so any implementation of these five calls gets them for free.

use alloy::primitives::{Bytes, B256};
use async_trait::async_trait;

use crate::{
	models::{EVMCallRequest, EVMTransaction, EVMTransactionReceipt},
	services::blockchain::BlockChainError,
};

/// Defines the core interface for blockchain clients
#[async_trait]
pub trait BlockChainClient: Send + Sync {
	/// Executes a read-only call against the latest block
	///
	/// # Returns
	/// * `Result<Bytes, BlockChainError>` - Raw return data
	async fn call(&self, request: &EVMCallRequest) -> Result<Bytes, BlockChainError>;

	/// Retrieves a transaction by hash, `None` when the node does not know it
	async fn get_transaction(&self, hash: B256)
		-> Result<Option<EVMTransaction>, BlockChainError>;

	/// Retrieves a transaction receipt by hash, `None` while pending or unknown
	async fn get_transaction_receipt(
		&self,
		hash: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError>;

	/// Retrieves the latest block number from the blockchain
	async fn get_block_number(&self) -> Result<u64, BlockChainError>;

	/// Estimates the gas needed to execute `request`
	async fn estimate_gas(&self, request: &EVMCallRequest) -> Result<u64, BlockChainError>;
}
