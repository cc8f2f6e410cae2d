//! HTTP surface of the gateway.
//!
//! Routes live under `/api`. Health and metrics are public, contract and
//! transaction routes require the `X-API-KEY` header. Every JSON response uses
//! the `{success, data}` / `{success, error}` envelope.

mod error;
pub mod handlers;
pub mod middleware;
mod response;
mod server;

pub use error::ApiError;
pub use response::{ApiResponse, ErrorBody};
pub use server::{configure, create_server};

use std::sync::Arc;

use crate::services::{
	blockchain::{ClientPool, ClientPoolTrait},
	contract::{ContractService, InterfaceSource},
	transaction::TransactionService,
};

/// Services shared by every worker
///
/// Generic over the pool so tests can route requests to mock transports.
pub struct AppState<P: ClientPoolTrait = ClientPool> {
	pub client_pool: Arc<P>,
	pub contract_service: Arc<ContractService<P>>,
	pub transaction_service: Arc<TransactionService<P>>,
}

impl<P: ClientPoolTrait> AppState<P> {
	/// Builds both services on top of one shared pool
	pub fn new(client_pool: Arc<P>, interface_source: Arc<dyn InterfaceSource>) -> Self {
		Self {
			contract_service: Arc::new(ContractService::new(
				client_pool.clone(),
				interface_source,
			)),
			transaction_service: Arc::new(TransactionService::new(client_pool.clone())),
			client_pool,
		}
	}
}

impl<P: ClientPoolTrait> Clone for AppState<P> {
	fn clone(&self) -> Self {
		Self {
			client_pool: self.client_pool.clone(),
			contract_service: self.contract_service.clone(),
			transaction_service: self.transaction_service.clone(),
		}
	}
}
