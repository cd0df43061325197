//! Endpoint registry
//!
//! Static mapping from dataset key to absolute URL. Nothing else in the
//! crate builds endpoint URLs.

use super::DatasetKey;

/// Default analytics service address
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5328";

/// Immutable dataset → address map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    base_url: String,
    addresses: [String; 9],
}

impl EndpointRegistry {
    /// Build the map for a service rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        // Normalize: remove trailing slash
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let addresses = DatasetKey::ALL.map(|key| format!("{}{}", base_url, key.path()));

        Self { base_url, addresses }
    }

    /// Resolve a dataset name to its address.
    ///
    /// Only the exact camelCase wire names resolve; anything else is `None`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        DatasetKey::ALL
            .iter()
            .find(|key| key.as_str() == name)
            .map(|key| self.address(*key))
    }

    /// Address of a known dataset
    pub fn address(&self, key: DatasetKey) -> &str {
        &self.addresses[key.index()]
    }

    /// Service root the addresses were built from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All entries in registry order, dormant ones included
    pub fn iter(&self) -> impl Iterator<Item = (DatasetKey, &str)> + '_ {
        DatasetKey::ALL
            .iter()
            .map(move |key| (*key, self.address(*key)))
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
