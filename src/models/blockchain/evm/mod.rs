//! Ethereum Virtual Machine (EVM) blockchain specific implementations.
//!
//! This module contains data structures for EVM JSON-RPC payloads: transactions,
//! receipts and call requests used by `eth_call` and `eth_estimateGas`.

mod call;
mod receipt;
mod transaction;

pub use call::CallRequest as EVMCallRequest;
pub use receipt::TransactionReceipt as EVMTransactionReceipt;
pub use transaction::Transaction as EVMTransaction;
