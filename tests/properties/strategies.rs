use alloy::primitives::Address;
use proptest::prelude::*;

/// Decimal chain ids, including the well-known ones
pub fn numeric_chain_id_strategy() -> impl Strategy<Value = u64> {
	prop_oneof![
		prop::sample::select(vec![1u64, 5, 10, 56, 137, 42161, 43114, 31337, 11155111]),
		any::<u64>(),
	]
}

/// Arbitrary chain id text, with surrounding whitespace and mixed case
pub fn chain_id_text_strategy() -> impl Strategy<Value = String> {
	("[ \t]{0,3}", "[a-zA-Z0-9_-]{0,12}", "[ \t]{0,3}")
		.prop_map(|(lead, body, trail)| format!("{}{}{}", lead, body, trail))
}

pub fn address_strategy() -> impl Strategy<Value = Address> {
	any::<[u8; 20]>().prop_map(Address::from)
}
