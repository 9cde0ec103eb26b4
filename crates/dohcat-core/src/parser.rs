//! Resolver list parsing.
//!
//! The source document is Markdown where each `## Name` header opens a
//! resolver section and bare `sdns://` lines list that resolver's stamps.
//! No other Markdown is interpreted.

use crate::{StampEntry, STAMP_PREFIX};

/// Section name used by the list for its own title; never a resolver.
pub const PLACEHOLDER_SECTION: &str = "public-resolvers";

const SECTION_MARKER: &str = "## ";

/// Extract `(name, stamp)` pairs in document order.
///
/// Stamps outside a named section, or under the placeholder section, are
/// dropped.
pub fn parse_resolver_list(document: &str) -> Vec<StampEntry> {
    let mut current: Option<&str> = None;
    let mut entries = Vec::new();

    for line in document.lines() {
        if let Some(header) = line.strip_prefix(SECTION_MARKER) {
            let name = header.trim();
            current = (!name.is_empty() && name != PLACEHOLDER_SECTION).then_some(name);
            continue;
        }

        let trimmed = line.trim();
        if !trimmed.starts_with(STAMP_PREFIX) {
            continue;
        }
        if let Some(name) = current {
            entries.push(StampEntry::new(name, trimmed));
        }
    }

    entries
}
