//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! EVM networks. Includes:
//!
//! - Generic blockchain client trait
//! - EVM client and its ABI helpers
//! - Network transport implementations
//! - Error handling for blockchain operations
//! - Client pool for managing one client per chain

mod client;
mod clients;
mod error;
mod pool;
mod transports;

pub use client::BlockChainClient;
pub use clients::{
	decode_function_output, encode_function_call, is_read_only, parse_address,
	parse_transaction_hash, EvmClient, EvmClientTrait,
};
pub use error::BlockChainError;
pub use pool::{ClientPool, ClientPoolTrait, ClientStorage, TransportConnector};
pub use transports::{
	BlockchainTransport, EVMTransportClient, HttpTransportClient, TransientErrorRetryStrategy,
	TransportError,
};
