//! Client pool for managing blockchain clients.
//!
//! This module provides a thread-safe client pooling system that:
//! - Caches one client per chain identifier
//! - Creates clients lazily on first use
//! - Constructs at most one client per chain, even under concurrent first access
//! - Leaves no entry behind when construction fails, so the next call starts over
//!
//! Lookups take a fast path under a read lock. On a miss a per-chain `OnceCell` is
//! inserted under the write lock and initialized outside of it, so construction for
//! one chain never blocks lookups for another.

use crate::{
	models::{ChainId, Endpoint},
	repositories::EndpointRepositoryTrait,
	services::blockchain::{
		BlockChainError, BlockchainTransport, EVMTransportClient, EvmClient, EvmClientTrait,
	},
	utils::metrics::{record_client_construction, set_client_pool_size},
};
use async_trait::async_trait;
use futures::{future::BoxFuture, FutureExt};
use reqwest_middleware::ClientWithMiddleware;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{OnceCell, RwLock};

/// Trait for the client pool.
#[async_trait]
pub trait ClientPoolTrait: Send + Sync {
	type EvmClient: EvmClientTrait + 'static;

	/// Returns the cached client for `chain_id`, constructing it on first use
	async fn get_evm_client(
		&self,
		chain_id: &ChainId,
	) -> Result<Arc<Self::EvmClient>, BlockChainError>;

	/// Drops every cached client; later lookups construct fresh ones
	async fn clear(&self);
}

/// Builds the transport for an endpoint
pub type TransportConnector<T> =
	Arc<dyn Fn(&Endpoint) -> BoxFuture<'static, Result<T, BlockChainError>> + Send + Sync>;

type ClientCell<T> = Arc<OnceCell<Arc<EvmClient<T>>>>;

/// Client storage indexed by chain id
///
/// Each entry is a cell that is either being initialized or holds the client.
pub struct ClientStorage<T: Send + Sync + Clone> {
	clients: RwLock<HashMap<ChainId, ClientCell<T>>>,
}

impl<T: Send + Sync + Clone> ClientStorage<T> {
	pub fn new() -> Self {
		Self {
			clients: RwLock::new(HashMap::new()),
		}
	}
}

impl<T: Send + Sync + Clone> Default for ClientStorage<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Main client pool manager.
///
/// Resolves chain ids through the endpoint registry and caches the resulting
/// clients for the process lifetime (or until `clear`). Clients are shared
/// through `Arc`, so callers holding one keep it valid after a clear.
pub struct ClientPool<T: Send + Sync + Clone = EVMTransportClient> {
	endpoints: Arc<dyn EndpointRepositoryTrait>,
	storage: ClientStorage<T>,
	connector: TransportConnector<T>,
}

impl ClientPool<EVMTransportClient> {
	/// Creates a new empty client pool.
	///
	/// Every transport shares `http_client`, and with it one connection pool.
	pub fn new(endpoints: Arc<dyn EndpointRepositoryTrait>, http_client: ClientWithMiddleware) -> Self {
		let connector: TransportConnector<EVMTransportClient> =
			Arc::new(move |endpoint: &Endpoint| {
				let client = http_client.clone();
				let endpoint = endpoint.clone();
				async move {
					EVMTransportClient::new(client, &endpoint).map_err(|e| {
						BlockChainError::connection_error(format!(
							"Failed to create transport for chain {}: {}",
							endpoint.chain_id, e
						))
					})
				}
				.boxed()
			});
		Self::with_connector(endpoints, connector)
	}
}

impl<T> ClientPool<T>
where
	T: BlockchainTransport + Send + Sync + Clone + 'static,
{
	/// Creates a pool that builds transports with `connector`
	pub fn with_connector(
		endpoints: Arc<dyn EndpointRepositoryTrait>,
		connector: TransportConnector<T>,
	) -> Self {
		Self {
			endpoints,
			storage: ClientStorage::new(),
			connector,
		}
	}

	/// Internal helper method to get or create a client.
	///
	/// 1. Fast path with read lock returns an initialized client
	/// 2. Otherwise the chain's cell is fetched or inserted under the write lock
	/// 3. The cell is initialized outside the map lock; concurrent callers for the
	///    same chain wait on the cell and receive the same client
	async fn get_or_create_client(
		&self,
		chain_id: &ChainId,
	) -> Result<Arc<EvmClient<T>>, BlockChainError> {
		// Fast path: check if client exists
		let existing = self.storage.clients.read().await.get(chain_id).cloned();
		let cell = match existing {
			Some(cell) => {
				if let Some(client) = cell.get() {
					return Ok(client.clone());
				}
				cell
			}
			None => {
				let mut clients = self.storage.clients.write().await;
				clients
					.entry(chain_id.clone())
					.or_insert_with(|| Arc::new(OnceCell::new()))
					.clone()
			}
		};

		let result = cell
			.get_or_try_init(|| self.create_client(chain_id))
			.await
			.cloned();

		match result {
			Ok(client) => {
				set_client_pool_size(self.client_count().await);
				Ok(client)
			}
			Err(error) => {
				// Forget the empty cell so a later call retries from scratch
				let mut clients = self.storage.clients.write().await;
				let is_same_empty_cell = clients
					.get(chain_id)
					.is_some_and(|current| Arc::ptr_eq(current, &cell) && !current.initialized());
				if is_same_empty_cell {
					clients.remove(chain_id);
				}
				Err(error)
			}
		}
	}

	async fn create_client(&self, chain_id: &ChainId) -> Result<Arc<EvmClient<T>>, BlockChainError> {
		let endpoint = self.endpoints.resolve(chain_id);
		tracing::info!(
			chain_id = %endpoint.chain_id,
			url = %endpoint.url,
			"Creating chain client"
		);

		let transport = (self.connector)(&endpoint).await.map_err(|e| match e {
			BlockChainError::ConnectionError(_) => e,
			other => BlockChainError::connection_error(other.to_string()),
		})?;
		record_client_construction(endpoint.chain_id.as_str());

		Ok(Arc::new(EvmClient::new_with_transport(transport, endpoint)))
	}

	/// Number of clients currently cached
	pub async fn client_count(&self) -> usize {
		self.storage
			.clients
			.read()
			.await
			.values()
			.filter(|cell| cell.initialized())
			.count()
	}
}

#[async_trait]
impl<T> ClientPoolTrait for ClientPool<T>
where
	T: BlockchainTransport + Send + Sync + Clone + 'static,
{
	type EvmClient = EvmClient<T>;

	/// Gets or creates an EVM client for the given chain.
	async fn get_evm_client(
		&self,
		chain_id: &ChainId,
	) -> Result<Arc<Self::EvmClient>, BlockChainError> {
		self.get_or_create_client(chain_id).await
	}

	async fn clear(&self) {
		let mut clients = self.storage.clients.write().await;
		let dropped = clients.len();
		clients.clear();
		set_client_pool_size(0);
		tracing::info!(dropped, "Cleared chain client cache");
	}
}
