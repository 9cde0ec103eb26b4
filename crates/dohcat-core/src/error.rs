use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that abort a catalog build
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Server answered with a non-success, non-redirect status
    #[error("failed to download {url}: {code} {reason}")]
    HttpStatus {
        /// URL that produced the status
        url: String,
        /// HTTP status code
        code: u16,
        /// Reason phrase, empty when the status has none
        reason: String,
    },

    /// Redirect chain exceeded the configured depth
    #[error("too many redirects (limit {limit}) while fetching {url}")]
    TooManyRedirects {
        /// Configured redirect cap
        limit: usize,
        /// URL that answered with the redirect past the cap
        url: String,
    },

    /// Request timed out
    #[error("request to {url} timed out after {secs} seconds")]
    Timeout {
        /// URL being fetched
        url: String,
        /// Configured timeout in seconds
        secs: u64,
    },

    /// Connection failed (DNS, reset, TLS)
    #[error("connection failed: {0}")]
    Connection(String),

    /// HTTP request failed for another reason
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Invalid URL or redirect target
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The compiled-in base catalog could not be loaded
    #[error("base catalog is invalid: {0}")]
    Seed(String),

    /// Writing the persisted catalog failed
    #[error("failed to write catalog to {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Reading a persisted catalog failed
    #[error("failed to read catalog from {}: {source}", path.display())]
    Read {
        /// Source path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns true if the error happened while retrieving the source document
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. }
                | Self::TooManyRedirects { .. }
                | Self::Timeout { .. }
                | Self::Connection(_)
                | Self::Http(_)
                | Self::InvalidUrl(_)
        )
    }

    /// Name of the pipeline stage this error belongs to
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::HttpStatus { .. }
            | Self::TooManyRedirects { .. }
            | Self::Timeout { .. }
            | Self::Connection(_)
            | Self::Http(_)
            | Self::InvalidUrl(_) => "fetch",
            Self::Seed(_) => "seed",
            Self::Write { .. } => "write",
            Self::Read { .. } => "read",
            Self::Json(_) => "serialize",
            Self::Config(_) => "config",
        }
    }

    /// Returns the HTTP status code if the server answered with an error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Reasons a single stamp could not be decoded.
///
/// These never abort a build; the offending line is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StampError {
    /// Input does not start with `sdns://`
    #[error("missing sdns:// prefix")]
    MissingPrefix,

    /// Nothing follows the prefix
    #[error("empty stamp payload")]
    Empty,

    /// Payload is not valid base64url
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Payload decoded to zero bytes
    #[error("stamp decoded to an empty buffer")]
    EmptyPayload,

    /// Buffer ended before a mandatory field
    #[error("truncated stamp: needed {needed} bytes, {available} available")]
    Truncated {
        /// Bytes required by the field being read
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },
}
