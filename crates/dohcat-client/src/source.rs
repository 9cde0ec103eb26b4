//! Abstraction over where the resolver list comes from.

use async_trait::async_trait;
use dohcat_core::Result;

/// Something that can produce the text of a resolver list document
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve the document at `url` as text
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
