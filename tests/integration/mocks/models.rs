use std::{collections::HashMap, sync::Arc};

use serde_json::{json, Value};

use evm_gateway::{
	models::{ChainId, EndpointConfig},
	repositories::{EndpointRepository, EndpointRepositoryTrait},
};

pub const MAINNET_URL: &str = "https://mainnet.example.com";
pub const POLYGON_URL: &str = "https://polygon.example.com";
pub const DEFAULT_URL: &str = "https://default.example.com";

/// USDT on mainnet, lowercase so no checksum is required
pub const TOKEN_ADDRESS: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
pub const HOLDER_ADDRESS: &str = "0x742d35cc6634c0532925a3b844bc454e4438f44e";
pub const TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

pub fn create_test_endpoint_config() -> EndpointConfig {
	let mut endpoints = HashMap::new();
	endpoints.insert(ChainId::from(1u64), MAINNET_URL.to_string());
	endpoints.insert(ChainId::from(137u64), POLYGON_URL.to_string());
	EndpointConfig::new(endpoints, DEFAULT_URL)
}

pub fn create_test_repository() -> Arc<dyn EndpointRepositoryTrait> {
	Arc::new(EndpointRepository::new(&create_test_endpoint_config()).unwrap())
}

/// `eth_getTransactionByHash` result, mined in `block` when given
pub fn create_test_transaction(block: Option<u64>) -> Value {
	json!({
		"hash": TX_HASH,
		"from": HOLDER_ADDRESS,
		"to": TOKEN_ADDRESS,
		"value": "0xde0b6b3a7640000",
		"blockNumber": block.map(|b| format!("{:#x}", b)),
		"blockHash": block.map(|_| "0x2d6a6d1a6e1b7f4b5f6c0e8b2f1d4f1c2a8b3e9d5c7f0a1b2c3d4e5f6a7b8c9d"),
		"nonce": "0x1",
		"gas": "0x5208",
		"gasPrice": "0x3b9aca00",
		"input": "0x"
	})
}

/// `eth_getTransactionReceipt` result
pub fn create_test_receipt(status: u64, block: u64) -> Value {
	json!({
		"transactionHash": TX_HASH,
		"transactionIndex": "0x0",
		"blockNumber": format!("{:#x}", block),
		"from": HOLDER_ADDRESS,
		"to": TOKEN_ADDRESS,
		"contractAddress": null,
		"cumulativeGasUsed": "0x5208",
		"gasUsed": "0x5208",
		"effectiveGasPrice": "0x3b9aca00",
		"status": format!("{:#x}", status),
		"type": "0x2",
		"logs": []
	})
}

/// ABI word holding `value`
pub fn encode_uint(value: u64) -> String {
	format!("0x{:064x}", value)
}
