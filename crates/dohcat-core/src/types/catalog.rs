use crate::ResolverEndpoint;
use serde::{Deserialize, Serialize};

/// Ordered list of resolver endpoints.
///
/// Order carries no meaning but is kept stable so persisted output diffs
/// cleanly between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<ResolverEndpoint>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of endpoints
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no endpoints
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an endpoint without deduplication
    pub fn push(&mut self, endpoint: ResolverEndpoint) {
        self.entries.push(endpoint);
    }

    /// Iterate over endpoints in order
    pub fn iter(&self) -> std::slice::Iter<'_, ResolverEndpoint> {
        self.entries.iter()
    }

    /// Find an endpoint by URL
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ResolverEndpoint> {
        self.entries.iter().find(|e| e.url == url)
    }

    /// Endpoints as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[ResolverEndpoint] {
        &self.entries
    }

    /// Consume the catalog, returning its endpoints
    #[must_use]
    pub fn into_inner(self) -> Vec<ResolverEndpoint> {
        self.entries
    }
}

impl From<Vec<ResolverEndpoint>> for Catalog {
    fn from(entries: Vec<ResolverEndpoint>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ResolverEndpoint> for Catalog {
    fn from_iter<I: IntoIterator<Item = ResolverEndpoint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = ResolverEndpoint;
    type IntoIter = std::vec::IntoIter<ResolverEndpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ResolverEndpoint;
    type IntoIter = std::slice::Iter<'a, ResolverEndpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
