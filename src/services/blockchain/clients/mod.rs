//! Blockchain client implementations.
//!
//! Contains the EVM client for Ethereum-compatible chains together with the
//! ABI helpers it uses to validate input and convert call data.

mod evm {
	pub mod abi;
	pub mod client;
}

pub use evm::abi::{
	decode_function_output, encode_function_call, is_read_only, parse_address,
	parse_transaction_hash,
};
pub use evm::client::{EvmClient, EvmClientTrait};
