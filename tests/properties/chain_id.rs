use std::collections::HashMap;

use proptest::prelude::*;

use evm_gateway::{
	models::{ChainId, EndpointConfig, DEFAULT_CHAIN_ID},
	repositories::{EndpointRepository, EndpointRepositoryTrait},
	services::blockchain::parse_address,
};

use crate::properties::strategies::{
	address_strategy, chain_id_text_strategy, numeric_chain_id_strategy,
};

const CONFIGURED: &[(u64, &str)] = &[
	(1, "https://mainnet.example.com"),
	(137, "https://polygon.example.com"),
];
const DEFAULT_URL: &str = "https://default.example.com";

fn repository() -> EndpointRepository {
	let endpoints: HashMap<ChainId, String> = CONFIGURED
		.iter()
		.map(|(id, url)| (ChainId::from(*id), url.to_string()))
		.collect();
	EndpointRepository::new(&EndpointConfig::new(endpoints, DEFAULT_URL)).unwrap()
}

proptest! {
	#[test]
	fn numeric_and_text_ids_normalize_identically(id in numeric_chain_id_strategy()) {
		let from_number = ChainId::from(id);
		prop_assert_eq!(&from_number, &ChainId::new(id.to_string()));
		prop_assert_eq!(&from_number, &ChainId::new(format!(" {} ", id)));

		let from_json_number: ChainId = serde_json::from_value(serde_json::json!(id)).unwrap();
		let from_json_text: ChainId =
			serde_json::from_value(serde_json::json!(id.to_string())).unwrap();
		prop_assert_eq!(&from_number, &from_json_number);
		prop_assert_eq!(&from_number, &from_json_text);
	}

	#[test]
	fn normalization_is_idempotent(raw in chain_id_text_strategy()) {
		let once = ChainId::new(&raw);
		let twice = ChainId::new(once.as_str());
		prop_assert_eq!(&once, &twice);
		prop_assert_eq!(once.as_str(), once.as_str().trim());
		prop_assert!(!once.as_str().is_empty());
		if raw.trim().is_empty() {
			prop_assert_eq!(once.as_str(), DEFAULT_CHAIN_ID);
		}
	}

	#[test]
	fn every_chain_id_resolves(raw in chain_id_text_strategy()) {
		let repository = repository();
		let chain_id = ChainId::new(&raw);
		let endpoint = repository.resolve(&chain_id);

		prop_assert_eq!(&endpoint.chain_id, &chain_id);
		match CONFIGURED.iter().find(|(id, _)| ChainId::from(*id) == chain_id) {
			Some((_, url)) => prop_assert_eq!(endpoint.url.as_str(), *url),
			None => prop_assert_eq!(endpoint.url.as_str(), DEFAULT_URL),
		}
	}

	#[test]
	fn unconfigured_numeric_ids_use_default(id in numeric_chain_id_strategy()) {
		prop_assume!(!CONFIGURED.iter().any(|(configured, _)| *configured == id));
		let endpoint = repository().resolve(&ChainId::from(id));
		prop_assert_eq!(endpoint.url.as_str(), DEFAULT_URL);
	}

	#[test]
	fn lowercase_and_checksummed_addresses_agree(address in address_strategy()) {
		let lowercase = format!("{:#x}", address);
		let checksummed = address.to_checksum(None);

		prop_assert_eq!(parse_address(&lowercase).unwrap(), address);
		prop_assert_eq!(parse_address(&checksummed).unwrap(), address);
	}
}
