use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// HTTP method a DoH endpoint expects queries on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    /// `GET` with the query in the `dns` parameter
    Get,
    /// `POST` with an `application/dns-message` body
    #[default]
    Post,
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A distinct DoH service endpoint.
///
/// `url` is the identity key. The trust fields are tri-state: `None` means
/// "unknown" and is omitted from the persisted form, which is not the same
/// as `Some(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverEndpoint {
    /// Resolver or operator name
    pub name: String,

    /// Canonical endpoint URL (`https://{hostname}{path}`)
    #[serde(default)]
    pub url: String,

    /// Transport convention
    #[serde(default)]
    pub request_method: RequestMethod,

    /// Whether the endpoint can be queried from a browser with CORS
    #[serde(default)]
    pub allows_cors_fallback: bool,

    /// Literal addresses known to serve this endpoint
    #[serde(default)]
    pub ip_hints: BTreeSet<String>,

    /// Country of operation (ISO 3166-1 alpha-2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Operator claims not to keep query logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_logs: Option<bool>,

    /// Legal jurisdiction of the operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    /// Operator publishes transparency reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<bool>,

    /// Resolver validates DNSSEC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,

    /// Resolver filters malware domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malware_filter: Option<bool>,

    /// Curated trust tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<String>,
}

impl ResolverEndpoint {
    /// Create an endpoint with decoder defaults: POST, no CORS, no hints and
    /// every trust field unknown.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            request_method: RequestMethod::Post,
            allows_cors_fallback: false,
            ip_hints: BTreeSet::new(),
            country: None,
            no_logs: None,
            jurisdiction: None,
            transparency: None,
            dnssec: None,
            malware_filter: None,
            trust_level: None,
        }
    }

    /// Canonical URL for a DoH host and path
    #[must_use]
    pub fn doh_url(hostname: &str, path: &str) -> String {
        format!("https://{hostname}{path}")
    }

    /// Add a literal address hint. Empty and blank strings are ignored.
    ///
    /// Returns true if the hint was not already present.
    pub fn add_ip_hint(&mut self, ip: impl Into<String>) -> bool {
        let ip = ip.into();
        let ip = ip.trim();
        if ip.is_empty() {
            return false;
        }
        self.ip_hints.insert(ip.to_string())
    }

    /// Builder-style variant of [`add_ip_hint`](Self::add_ip_hint)
    #[must_use]
    pub fn with_ip_hint(mut self, ip: impl Into<String>) -> Self {
        self.add_ip_hint(ip);
        self
    }

    /// Drop blank hints that may have come from hand-edited input
    pub fn sanitize_ip_hints(&mut self) {
        self.ip_hints = std::mem::take(&mut self.ip_hints)
            .into_iter()
            .filter_map(|ip| {
                let trimmed = ip.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
    }

    /// Returns true if any trust field is known
    #[must_use]
    pub const fn has_trust_metadata(&self) -> bool {
        self.country.is_some()
            || self.no_logs.is_some()
            || self.jurisdiction.is_some()
            || self.transparency.is_some()
            || self.dnssec.is_some()
            || self.malware_filter.is_some()
            || self.trust_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_defaults() {
        let endpoint = ResolverEndpoint::new("Example", "https://example.com/dns-query");
        assert_eq!(endpoint.request_method, RequestMethod::Post);
        assert!(!endpoint.allows_cors_fallback);
        assert!(endpoint.ip_hints.is_empty());
        assert!(!endpoint.has_trust_metadata());
    }

    #[test]
    fn test_add_ip_hint_rejects_blank_and_duplicates() {
        let mut endpoint = ResolverEndpoint::new("Example", "https://example.com/dns-query");
        assert!(endpoint.add_ip_hint("9.9.9.9"));
        assert!(!endpoint.add_ip_hint("9.9.9.9"));
        assert!(!endpoint.add_ip_hint(""));
        assert!(!endpoint.add_ip_hint("   "));
        assert_eq!(endpoint.ip_hints.len(), 1);
    }

    #[test]
    fn test_unknown_fields_are_omitted() {
        let endpoint = ResolverEndpoint::new("Example", "https://example.com/dns-query")
            .with_ip_hint("192.0.2.1");
        let value = serde_json::to_value(&endpoint).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["name"], "Example");
        assert_eq!(obj["requestMethod"], "post");
        assert_eq!(obj["allowsCorsFallback"], false);
        assert_eq!(obj["ipHints"], serde_json::json!(["192.0.2.1"]));
        assert!(!obj.contains_key("noLogs"));
        assert!(!obj.contains_key("trustLevel"));
    }

    #[test]
    fn test_known_false_is_kept() {
        let mut endpoint = ResolverEndpoint::new("Example", "https://example.com/dns-query");
        endpoint.malware_filter = Some(false);
        let json = serde_json::to_string(&endpoint).unwrap();
        assert!(json.contains(r#""malwareFilter":false"#));

        let parsed: ResolverEndpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.malware_filter, Some(false));
        assert_eq!(parsed.dnssec, None);
    }

    #[test]
    fn test_sanitize_drops_blank_hints() {
        let json = r#"{"name":"X","url":"https://x/dns-query","ipHints":["", " 1.2.3.4 ", "1.2.3.4"]}"#;
        let mut endpoint: ResolverEndpoint = serde_json::from_str(json).unwrap();
        endpoint.sanitize_ip_hints();
        assert_eq!(endpoint.ip_hints.len(), 1);
        assert!(endpoint.ip_hints.contains("1.2.3.4"));
    }
}
