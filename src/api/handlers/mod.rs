//! Route handlers.

pub mod contracts;
pub mod health;
pub mod metrics;
pub mod transactions;

use serde::Deserialize;

use crate::models::ChainId;

/// `?chainId=` query accepted by every chain-scoped route
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainQuery {
	pub chain_id: Option<String>,
}

impl ChainQuery {
	pub fn chain_id(&self) -> ChainId {
		ChainId::from_optional(self.chain_id.as_deref())
	}
}
