//! Sources of contract interface descriptors.

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::{
	models::{ChainId, InterfaceDescriptor},
	services::blockchain::BlockChainError,
};

/// Human-readable ERC-20 interface
pub const ERC20_SIGNATURES: &[&str] = &[
	"function name() view returns (string)",
	"function symbol() view returns (string)",
	"function decimals() view returns (uint8)",
	"function totalSupply() view returns (uint256)",
	"function balanceOf(address) view returns (uint256)",
	"function transfer(address to, uint256 amount) returns (bool)",
	"function allowance(address owner, address spender) view returns (uint256)",
	"function approve(address spender, uint256 amount) returns (bool)",
	"function transferFrom(address from, address to, uint256 amount) returns (bool)",
	"event Transfer(address indexed from, address indexed to, uint256 value)",
	"event Approval(address indexed owner, address indexed spender, uint256 value)",
];

/// Provides the interface to use for a contract
#[async_trait]
pub trait InterfaceSource: Send + Sync {
	async fn resolve_interface(
		&self,
		address: &Address,
		chain_id: &ChainId,
	) -> Result<Arc<InterfaceDescriptor>, BlockChainError>;
}

/// Serves the same descriptor for every contract
#[derive(Debug, Clone)]
pub struct StaticInterfaceSource {
	interface: Arc<InterfaceDescriptor>,
}

impl StaticInterfaceSource {
	pub fn new(interface: InterfaceDescriptor) -> Self {
		Self {
			interface: Arc::new(interface),
		}
	}

	/// Source answering every lookup with the ERC-20 interface
	pub fn erc20() -> Result<Self, BlockChainError> {
		let interface = InterfaceDescriptor::from_human_readable(ERC20_SIGNATURES)
			.map_err(BlockChainError::internal_error)?;
		Ok(Self::new(interface))
	}
}

#[async_trait]
impl InterfaceSource for StaticInterfaceSource {
	async fn resolve_interface(
		&self,
		_address: &Address,
		_chain_id: &ChainId,
	) -> Result<Arc<InterfaceDescriptor>, BlockChainError> {
		Ok(self.interface.clone())
	}
}
