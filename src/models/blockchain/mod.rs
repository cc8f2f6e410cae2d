//! Blockchain-specific model implementations.
//!
//! Only EVM-compatible chains are served by the gateway; the types here mirror the
//! JSON-RPC objects returned by upstream nodes.

pub mod evm;
