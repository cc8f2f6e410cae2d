//! Core services of the gateway.
//!
//! - `blockchain`: chain clients, transports and the client pool
//! - `contract`: contract lookups, read calls and transaction preparation
//! - `transaction`: receipts, status and gas estimation

pub mod blockchain;
pub mod contract;
pub mod transaction;
