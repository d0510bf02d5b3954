use std::fmt;

use async_trait::async_trait;

use crate::core::work::WorkId;

/// Errors that can occur while fetching the work catalog.
/// Every variant is recovered locally by falling back to the default list;
/// nothing here propagates past the loader boundary.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The document was not well-formed, or the `bwvs` field was missing or
    /// of the wrong type.
    Parse(String),
    /// The document parsed but carried an empty work list.
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "catalog error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::Empty => write!(f, "catalog document carries no works"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Where the ordered set of available works comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches the raw identifier list. Ordering and deduplication are the
    /// caller's concern; a successful result is simply what the document
    /// listed.
    async fn fetch_works(&self) -> Result<Vec<WorkId>, CatalogError>;
}
