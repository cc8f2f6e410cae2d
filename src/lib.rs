//! EVM read gateway.
//!
//! Exposes HTTP endpoints for reading smart-contract state and transaction status
//! from one or more EVM networks, proxying every call to upstream JSON-RPC nodes.
//!
//! # Architecture
//! - Endpoint registry: static chain id to RPC URL mapping loaded at startup
//! - Client pool: lazily constructed, cached chain clients (one per chain id)
//! - Chain client: JSON-RPC adapter exposing contract reads and transaction lookups
//! - Services: contract and transaction use cases consumed by the HTTP handlers
//! - API: actix-web routes, authentication, rate limiting and error rendering

pub mod api;
pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
