//! Core domain models for the gateway.
//!
//! - Chains: normalized chain identifiers and the endpoints they resolve to
//! - Contracts: interface descriptors and contract handles
//! - Transactions: status views and unsigned transaction payloads

mod chain;
mod contract;
mod transaction;

pub use chain::{ChainId, Endpoint, DEFAULT_CHAIN_ID};
pub use contract::{ContractDescriptor, InterfaceDescriptor};
pub use transaction::{PreparedTransaction, TransactionStatus, TransactionStatusView};
