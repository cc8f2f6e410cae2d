//! Domain models and data structures for the gateway.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: JSON-RPC views of EVM transactions, receipts and call requests
//! - `config`: Gateway configuration loading and validation
//! - `core`: Core domain models (chain ids, endpoints, contracts, transaction status)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::evm::{EVMCallRequest, EVMTransaction, EVMTransactionReceipt};

// Re-export core types
pub use core::{
	ChainId, ContractDescriptor, Endpoint, InterfaceDescriptor, PreparedTransaction,
	TransactionStatus, TransactionStatusView, DEFAULT_CHAIN_ID,
};

// Re-export config types
pub use config::{
	ConfigError, EndpointConfig, Environment, GatewayConfig, RateLimitConfig, RpcConfig,
	ServerConfig, WELL_KNOWN_ENDPOINTS,
};
