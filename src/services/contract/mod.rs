//! Contract use cases: descriptor lookup, read-only calls and unsigned
//! transaction preparation.

mod source;

pub use source::{InterfaceSource, StaticInterfaceSource, ERC20_SIGNATURES};

use std::{str::FromStr, sync::Arc};

use alloy::primitives::U256;
use serde_json::Value;

use crate::{
	models::{ChainId, ContractDescriptor, PreparedTransaction},
	services::blockchain::{
		encode_function_call, parse_address, BlockChainError, ClientPoolTrait, EvmClientTrait,
	},
	utils::constants::PREPARE_TX_DEFAULT_CHAIN_ID,
};

/// Contract operations routed through the client pool
pub struct ContractService<P: ClientPoolTrait> {
	pool: Arc<P>,
	source: Arc<dyn InterfaceSource>,
}

impl<P: ClientPoolTrait> ContractService<P> {
	pub fn new(pool: Arc<P>, source: Arc<dyn InterfaceSource>) -> Self {
		Self { pool, source }
	}

	/// Builds the contract handle for `address` on `chain_id`
	pub async fn get_contract(
		&self,
		address: &str,
		chain_id: &ChainId,
	) -> Result<ContractDescriptor, BlockChainError> {
		self.load_contract(address, chain_id)
			.await
			.map(|(contract, _)| contract)
			.inspect_err(|e| {
				tracing::error!(address, chain_id = %chain_id, error = %e, "Failed to load contract")
			})
	}

	/// Calls a read-only function and returns its decoded result
	pub async fn call_function(
		&self,
		address: &str,
		function_name: &str,
		args: &[Value],
		chain_id: &ChainId,
	) -> Result<Value, BlockChainError> {
		let result: Result<Value, BlockChainError> = async {
			let (contract, client) = self.load_contract(address, chain_id).await?;
			client
				.call_read_function(&contract, function_name, args)
				.await
		}
		.await;

		result.inspect_err(|e| {
			tracing::error!(
				address,
				function = function_name,
				chain_id = %chain_id,
				error = %e,
				"Contract call failed"
			)
		})
	}

	/// Builds an unsigned transaction calling `function_name`
	///
	/// Nothing is signed or sent. `value` defaults to zero and `chain_id` to
	/// mainnet when absent.
	pub async fn prepare_transaction(
		&self,
		address: &str,
		function_name: &str,
		args: &[Value],
		value: Option<&str>,
		chain_id: Option<&str>,
	) -> Result<PreparedTransaction, BlockChainError> {
		let chain_id = chain_id
			.filter(|id| !id.trim().is_empty())
			.map(ChainId::new)
			.unwrap_or_else(|| ChainId::new(PREPARE_TX_DEFAULT_CHAIN_ID));

		let result: Result<PreparedTransaction, BlockChainError> = async {
			let to = parse_address(address)?;
			let interface = self.source.resolve_interface(&to, &chain_id).await?;
			let function = interface
				.function(function_name, args.len())
				.ok_or_else(|| {
					BlockChainError::invalid_input(format!(
						"Function {} not found in contract",
						function_name
					))
				})?;
			let data = encode_function_call(function, args)?;
			let value = parse_value(value)?;

			Ok(PreparedTransaction {
				to,
				data,
				value: format!("{:#x}", value),
				chain_id: chain_id.to_string(),
			})
		}
		.await;

		result.inspect_err(|e| {
			tracing::error!(
				address,
				function = function_name,
				chain_id = %chain_id,
				error = %e,
				"Failed to prepare transaction"
			)
		})
	}

	/// Validates the address, resolves the interface and fetches the chain client
	async fn load_contract(
		&self,
		address: &str,
		chain_id: &ChainId,
	) -> Result<(ContractDescriptor, Arc<P::EvmClient>), BlockChainError> {
		let parsed = parse_address(address)?;
		let interface = self.source.resolve_interface(&parsed, chain_id).await?;
		let client = self.pool.get_evm_client(chain_id).await?;
		let contract = client.get_contract(address, interface)?;
		Ok((contract, client))
	}
}

/// Parses a wei amount given in decimal or `0x` hex
fn parse_value(value: Option<&str>) -> Result<U256, BlockChainError> {
	match value.map(str::trim).filter(|v| !v.is_empty()) {
		None => Ok(U256::ZERO),
		Some(raw) => U256::from_str(raw).map_err(|e| {
			BlockChainError::invalid_input(format!("Invalid transaction value {}: {}", raw, e))
		}),
	}
}
