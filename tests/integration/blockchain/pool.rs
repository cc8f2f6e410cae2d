use std::sync::{atomic::Ordering, Arc};

use futures::future::join_all;
use reqwest_middleware::ClientBuilder;

use evm_gateway::{
	models::{ChainId, Endpoint},
	repositories::EndpointRepositoryTrait,
	services::blockchain::{BlockChainError, ClientPool, ClientPoolTrait, EvmClientTrait},
};

use crate::integration::mocks::{
	create_mock_pool, create_test_repository, MockEVMTransportClient, DEFAULT_URL, MAINNET_URL,
	POLYGON_URL,
};

fn mock_transport(_: &Endpoint) -> Result<MockEVMTransportClient, BlockChainError> {
	Ok(MockEVMTransportClient::new())
}

#[tokio::test]
async fn test_distinct_chains_get_distinct_clients() {
	let (pool, constructions) = create_mock_pool(create_test_repository(), mock_transport);

	let mainnet = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();
	let polygon = pool.get_evm_client(&ChainId::from(137u64)).await.unwrap();

	assert!(!Arc::ptr_eq(&mainnet, &polygon));
	assert_eq!(mainnet.endpoint().url, MAINNET_URL);
	assert_eq!(polygon.endpoint().url, POLYGON_URL);
	assert_eq!(constructions.load(Ordering::SeqCst), 2);
	assert_eq!(pool.client_count().await, 2);
}

#[tokio::test]
async fn test_repeated_lookups_return_same_client() {
	let (pool, constructions) = create_mock_pool(create_test_repository(), mock_transport);

	let first = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();
	let second = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_numeric_and_string_ids_share_client() {
	let (pool, constructions) = create_mock_pool(create_test_repository(), mock_transport);

	let from_string = pool.get_evm_client(&ChainId::from("1")).await.unwrap();
	let from_number = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();
	let padded = pool.get_evm_client(&ChainId::new(" 1 ")).await.unwrap();

	assert!(Arc::ptr_eq(&from_string, &from_number));
	assert!(Arc::ptr_eq(&from_string, &padded));
	assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_clear_forces_new_client() {
	let (pool, constructions) = create_mock_pool(create_test_repository(), mock_transport);

	let before = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();
	pool.clear().await;
	assert_eq!(pool.client_count().await, 0);

	let after = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap();
	assert!(!Arc::ptr_eq(&before, &after));
	assert_eq!(after.endpoint().url, MAINNET_URL);
	assert_eq!(constructions.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unknown_and_absent_chain_use_default_endpoint() {
	let (pool, _) = create_mock_pool(create_test_repository(), mock_transport);

	let unknown = pool.get_evm_client(&ChainId::from(999u64)).await.unwrap();
	assert_eq!(unknown.endpoint().url, DEFAULT_URL);
	assert_eq!(unknown.endpoint().chain_id.as_str(), "999");

	let absent = pool
		.get_evm_client(&ChainId::from_optional(None::<&str>))
		.await
		.unwrap();
	assert_eq!(absent.endpoint().url, DEFAULT_URL);
	assert!(absent.endpoint().chain_id.is_default());
	assert!(!Arc::ptr_eq(&unknown, &absent));
}

#[tokio::test]
async fn test_concurrent_first_lookups_construct_once() {
	let (pool, constructions) = create_mock_pool(create_test_repository(), mock_transport);
	let pool = Arc::new(pool);

	let tasks = (0..50).map(|_| {
		let pool = pool.clone();
		tokio::spawn(async move { pool.get_evm_client(&ChainId::from("137")).await })
	});
	let clients: Vec<_> = join_all(tasks)
		.await
		.into_iter()
		.map(|joined| joined.unwrap().unwrap())
		.collect();

	assert_eq!(constructions.load(Ordering::SeqCst), 1);
	assert!(clients.iter().all(|client| Arc::ptr_eq(client, &clients[0])));
	assert_eq!(pool.client_count().await, 1);
}

#[tokio::test]
async fn test_failed_construction_is_not_cached() {
	let attempts = Arc::new(std::sync::atomic::AtomicUsize::new(0));
	let seen = attempts.clone();
	let (pool, constructions) = create_mock_pool(create_test_repository(), move |_| {
		if seen.fetch_add(1, Ordering::SeqCst) == 0 {
			Err(BlockChainError::InternalError("dial failed".into()))
		} else {
			Ok(MockEVMTransportClient::new())
		}
	});

	let result = pool.get_evm_client(&ChainId::from(1u64)).await;
	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
	assert_eq!(pool.client_count().await, 0);

	let client = pool.get_evm_client(&ChainId::from(1u64)).await;
	assert!(client.is_ok());
	assert_eq!(constructions.load(Ordering::SeqCst), 2);
	assert_eq!(pool.client_count().await, 1);
}

struct InvalidEndpoints;

impl EndpointRepositoryTrait for InvalidEndpoints {
	fn resolve(&self, chain_id: &ChainId) -> Endpoint {
		Endpoint::new(chain_id.clone(), "ftp://node.example.com")
	}

	fn get(&self, _chain_id: &ChainId) -> Option<Endpoint> {
		None
	}

	fn get_all(&self) -> std::collections::HashMap<ChainId, Endpoint> {
		Default::default()
	}
}

#[tokio::test]
async fn test_http_pool_binds_clients_to_endpoints() {
	let http_client = ClientBuilder::new(reqwest::Client::new()).build();
	let pool = ClientPool::new(create_test_repository(), http_client);

	let client = pool.get_evm_client(&ChainId::from(137u64)).await.unwrap();
	assert_eq!(client.endpoint().url, POLYGON_URL);
	assert_eq!(client.endpoint().chain_id, ChainId::from(137u64));
}

#[tokio::test]
async fn test_http_pool_rejects_unsupported_scheme() {
	let http_client = ClientBuilder::new(reqwest::Client::new()).build();
	let pool = ClientPool::new(Arc::new(InvalidEndpoints), http_client);

	let error = pool.get_evm_client(&ChainId::from(1u64)).await.unwrap_err();
	assert!(matches!(error, BlockChainError::ConnectionError(_)));
	assert_eq!(pool.client_count().await, 0);
}
