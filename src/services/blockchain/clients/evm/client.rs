//! EVM-compatible blockchain client implementation.
//!
//! This module provides functionality to interact with Ethereum and other EVM-compatible
//! blockchains: contract reads through `eth_call`, transaction and receipt lookups,
//! gas estimation and transaction status derivation.

use std::sync::Arc;

use alloy::primitives::{Bytes, B256, U64};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
	models::{
		ContractDescriptor, EVMCallRequest, EVMTransaction, EVMTransactionReceipt, Endpoint,
		InterfaceDescriptor, TransactionStatus, TransactionStatusView,
	},
	services::blockchain::{
		client::BlockChainClient,
		clients::evm::abi::{
			decode_function_output, encode_function_call, is_read_only, parse_address,
			parse_transaction_hash,
		},
		transports::{BlockchainTransport, EVMTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Bound to exactly one endpoint for its whole lifetime.
#[derive(Clone, Debug)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	transport: T,
	endpoint: Endpoint,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T, endpoint: Endpoint) -> Self {
		Self {
			transport,
			endpoint,
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}
}

impl EvmClient<EVMTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `client` - Shared HTTP client
	/// * `endpoint` - Chain id and RPC URL the client is bound to
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub fn new(client: ClientWithMiddleware, endpoint: &Endpoint) -> Result<Self, BlockChainError> {
		let transport = EVMTransportClient::new(client, endpoint).map_err(|e| {
			BlockChainError::connection_error(format!(
				"Failed to create client for chain {}: {}",
				endpoint.chain_id, e
			))
		})?;
		Ok(Self::new_with_transport(transport, endpoint.clone()))
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> EvmClient<T> {
	/// Sends a request and extracts the `result` member of the JSON-RPC response
	async fn request(&self, method: &str, params: Value) -> Result<Value, BlockChainError> {
		let response = self.transport.send_raw_request(method, Some(params)).await?;

		if let Some(error) = response.get("error") {
			let message = error
				.get("message")
				.and_then(Value::as_str)
				.map(str::to_string)
				.unwrap_or_else(|| error.to_string());
			return Err(BlockChainError::upstream_error(format!(
				"{} failed on chain {}: {}",
				method, self.endpoint.chain_id, message
			)));
		}

		response.get("result").cloned().ok_or_else(|| {
			BlockChainError::upstream_error(format!(
				"{} returned no 'result' field on chain {}",
				method, self.endpoint.chain_id
			))
		})
	}

	async fn request_as<R: DeserializeOwned>(
		&self,
		method: &str,
		params: Value,
	) -> Result<R, BlockChainError> {
		let result = self.request(method, params).await?;
		serde_json::from_value(result).map_err(|e| {
			BlockChainError::upstream_error(format!("Failed to parse {} result: {}", method, e))
		})
	}

	fn call_params(request: &EVMCallRequest) -> Result<Value, BlockChainError> {
		serde_json::to_value(request).map_err(|e| {
			BlockChainError::internal_error(format!("Failed to serialize call request: {}", e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> BlockChainClient for EvmClient<T> {
	async fn call(&self, request: &EVMCallRequest) -> Result<Bytes, BlockChainError> {
		let params = json!([Self::call_params(request)?, "latest"]);
		self.request_as("eth_call", params).await
	}

	async fn get_transaction(
		&self,
		hash: B256,
	) -> Result<Option<EVMTransaction>, BlockChainError> {
		self.request_as("eth_getTransactionByHash", json!([hash]))
			.await
	}

	async fn get_transaction_receipt(
		&self,
		hash: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError> {
		self.request_as("eth_getTransactionReceipt", json!([hash]))
			.await
	}

	async fn get_block_number(&self) -> Result<u64, BlockChainError> {
		let number: U64 = self.request_as("eth_blockNumber", json!([])).await?;
		Ok(number.to::<u64>())
	}

	async fn estimate_gas(&self, request: &EVMCallRequest) -> Result<u64, BlockChainError> {
		let params = json!([Self::call_params(request)?]);
		let gas: U64 = self.request_as("eth_estimateGas", params).await?;
		Ok(gas.to::<u64>())
	}
}

/// Extended functionality specific to EVM-compatible blockchains
///
/// Every operation is derived from the `BlockChainClient` capability set.
#[async_trait]
pub trait EvmClientTrait: BlockChainClient {
	/// Endpoint the client is bound to
	fn endpoint(&self) -> &Endpoint;

	/// Builds a contract handle for `address` using the given interface
	///
	/// # Errors
	/// - `InvalidInput` when the address is malformed or fails its checksum
	fn get_contract(
		&self,
		address: &str,
		interface: Arc<InterfaceDescriptor>,
	) -> Result<ContractDescriptor, BlockChainError> {
		Ok(ContractDescriptor {
			address: parse_address(address)?,
			chain_id: self.endpoint().chain_id.clone(),
			interface,
		})
	}

	/// Invokes a read-only function and returns its decoded result
	///
	/// # Errors
	/// - `InvalidInput` for unknown or state-changing functions and bad arguments,
	///   raised before any request is sent
	/// - `UpstreamError` when the node fails or returns undecodable data
	async fn call_read_function(
		&self,
		contract: &ContractDescriptor,
		function_name: &str,
		args: &[Value],
	) -> Result<Value, BlockChainError> {
		let function = contract
			.interface
			.function(function_name, args.len())
			.ok_or_else(|| {
				BlockChainError::invalid_input(format!(
					"Function {} not found in contract",
					function_name
				))
			})?;

		if !is_read_only(function) {
			return Err(BlockChainError::invalid_input(format!(
				"Function {} modifies state and cannot be called, prepare a transaction instead",
				function_name
			)));
		}

		let data = encode_function_call(function, args)?;
		let output = self
			.call(&EVMCallRequest::new(contract.address, data))
			.await?;
		decode_function_output(function, &output)
	}

	/// Derives the status of a transaction
	///
	/// The transaction is looked up first. Unmined transactions are reported as
	/// pending without further requests. For mined transactions the receipt and
	/// the current block number are fetched to compute the outcome and confirmations.
	/// Confirmations count from the containing block, so a mined transaction whose
	/// receipt is not yet available stays pending but still reports them.
	///
	/// # Errors
	/// - `InvalidInput` for malformed hashes
	/// - `NotFound` when the node does not know the transaction
	async fn get_transaction_status(
		&self,
		hash: &str,
	) -> Result<TransactionStatusView, BlockChainError> {
		let hash = parse_transaction_hash(hash)?;
		let transaction = self
			.get_transaction(hash)
			.await?
			.ok_or_else(|| BlockChainError::not_found(format!("Transaction {} not found", hash)))?;

		let mut view = TransactionStatusView {
			hash,
			status: TransactionStatus::Pending,
			block_number: transaction.block_number(),
			confirmations: 0,
			from: transaction.from,
			to: transaction.to,
			value: transaction.value.to_string(),
			gas_used: None,
			effective_gas_price: None,
		};

		let Some(tx_block) = transaction.block_number() else {
			return Ok(view);
		};

		let receipt = self.get_transaction_receipt(hash).await?;
		let current_block = self.get_block_number().await?;
		view.confirmations = current_block.saturating_sub(tx_block).saturating_add(1);

		// Mined but the node has not indexed the receipt yet
		let Some(receipt) = receipt else {
			return Ok(view);
		};

		view.status = if receipt.is_success() {
			TransactionStatus::Success
		} else {
			TransactionStatus::Failed
		};
		view.gas_used = Some(receipt.gas_used.to_string());
		view.effective_gas_price = receipt.effective_gas_price.map(|price| price.to_string());

		Ok(view)
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}
}
