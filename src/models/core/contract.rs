use alloy::{
	json_abi::{Event, Function},
	primitives::Address,
};
use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::models::ChainId;

/// Contract interface described by human-readable signatures
///
/// The original signature strings are kept for display; parsed functions and
/// events are used for encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
	signatures: Vec<String>,
	functions: Vec<Function>,
	events: Vec<Event>,
}

impl InterfaceDescriptor {
	/// Parses a list of signatures such as `function balanceOf(address) view returns (uint256)`
	/// or `event Transfer(address indexed from, address indexed to, uint256 value)`.
	pub fn from_human_readable<S: AsRef<str>>(signatures: &[S]) -> Result<Self, String> {
		let mut descriptor = Self {
			signatures: Vec::with_capacity(signatures.len()),
			functions: Vec::new(),
			events: Vec::new(),
		};

		for signature in signatures {
			let signature = signature.as_ref().trim();
			if signature.starts_with("event ") {
				let event = Event::parse(signature)
					.map_err(|e| format!("Invalid event signature '{}': {}", signature, e))?;
				descriptor.events.push(event);
			} else {
				let function = Function::parse(signature)
					.map_err(|e| format!("Invalid function signature '{}': {}", signature, e))?;
				descriptor.functions.push(function);
			}
			descriptor.signatures.push(signature.to_string());
		}

		Ok(descriptor)
	}

	pub fn signatures(&self) -> &[String] {
		&self.signatures
	}

	pub fn functions(&self) -> &[Function] {
		&self.functions
	}

	pub fn events(&self) -> &[Event] {
		&self.events
	}

	/// Finds a function by name, preferring an overload taking `arg_count` inputs
	pub fn function(&self, name: &str, arg_count: usize) -> Option<&Function> {
		let mut candidates = self.functions.iter().filter(|f| f.name == name).peekable();
		let first = *candidates.peek()?;
		Some(
			candidates
				.find(|f| f.inputs.len() == arg_count)
				.unwrap_or(first),
		)
	}
}

impl Serialize for InterfaceDescriptor {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(&self.signatures)
	}
}

/// Handle on a deployed contract: where it lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDescriptor {
	pub address: Address,
	pub chain_id: ChainId,
	pub interface: Arc<InterfaceDescriptor>,
}
