//! Document source trait.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::SourceError;

/// A retrieved forward-curve document.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Raw workbook bytes
    pub bytes: Bytes,
    /// True only when the document is dated today; a fallback to an earlier
    /// publication clears this flag
    pub is_current_day: bool,
}

/// Retrieves the latest available forward-curve document.
///
/// Implementations own their retry and fallback behavior; a returned error
/// means the request cannot proceed.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the freshest document available.
    async fn fetch(&self) -> Result<FetchedDocument, SourceError>;
}
