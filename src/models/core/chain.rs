use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier used when a request carries no chain id
pub const DEFAULT_CHAIN_ID: &str = "default";

/// Normalized chain identifier
///
/// Numeric and string forms of the same id collapse to one token: `1`, `"1"`
/// and `" 1 "` are all `ChainId("1")`. Blank input becomes [`DEFAULT_CHAIN_ID`].
/// Named ids (e.g. `"Default"`) are lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
	pub fn new(raw: impl AsRef<str>) -> Self {
		let normalized = raw.as_ref().trim().to_lowercase();
		if normalized.is_empty() {
			Self::default()
		} else {
			Self(normalized)
		}
	}

	/// Normalizes an optional identifier, mapping `None` to the default chain
	pub fn from_optional<S: AsRef<str>>(raw: Option<S>) -> Self {
		raw.map(Self::new).unwrap_or_default()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_default(&self) -> bool {
		self.0 == DEFAULT_CHAIN_ID
	}
}

impl Default for ChainId {
	fn default() -> Self {
		Self(DEFAULT_CHAIN_ID.to_string())
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<u64> for ChainId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl From<&str> for ChainId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for ChainId {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl AsRef<str> for ChainId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl<'de> Deserialize<'de> for ChainId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawChainId {
			Number(u64),
			Text(String),
		}

		Ok(match RawChainId::deserialize(deserializer)? {
			RawChainId::Number(number) => ChainId::from(number),
			RawChainId::Text(text) => ChainId::new(text),
		})
	}
}

/// Upstream JSON-RPC endpoint bound to a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
	pub chain_id: ChainId,
	pub url: String,
}

impl Endpoint {
	pub fn new(chain_id: impl Into<ChainId>, url: impl Into<String>) -> Self {
		Self {
			chain_id: chain_id.into(),
			url: url.into(),
		}
	}
}
