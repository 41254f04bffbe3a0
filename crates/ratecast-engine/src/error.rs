//! Engine error type.

use thiserror::Error;

use ratecast_traits::{DecodeError, SourceError, StoreError};

/// Pipeline failure surfaced to the service boundary.
///
/// No partial results: any stage failing fails the whole request.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine was built without a required component.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Document retrieval failed (fallback included).
    #[error("document retrieval failed: {0}")]
    Source(#[from] SourceError),

    /// Workbook decoding failed.
    #[error("curve decoding failed: {0}")]
    Decode(#[from] DecodeError),

    /// Snapshot storage failed.
    #[error("curve storage failed: {0}")]
    Store(#[from] StoreError),
}
