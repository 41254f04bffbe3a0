//! Error types shared across the pipeline seams.

use thiserror::Error;

/// Document retrieval failure.
///
/// Every variant is transient from the point of view of a single dated
/// attempt; the retry ladder in the source implementation decides when a
/// failure becomes fatal for the request.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The remote host answered with a non-success status.
    #[error("document request returned status {status}")]
    Http {
        /// HTTP status code of the failed response
        status: u16,
    },

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
}

/// Workbook decoding failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a readable workbook.
    #[error("unreadable workbook: {0}")]
    Workbook(String),

    /// The expected sheet is absent.
    #[error("sheet not found: {0}")]
    SheetMissing(String),

    /// An expected column header is absent from the header row.
    #[error("column header not found: {0}")]
    ColumnMissing(String),

    /// The surviving rows do not form a valid curve.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Curve construction failure.
#[derive(Debug, Error)]
pub enum CurveError {
    /// No points survived decoding.
    #[error("curve has no points")]
    Empty,

    /// Two points share the same date.
    #[error("duplicate curve date: {0}")]
    DuplicateDate(chrono::NaiveDate),
}

/// Persistent store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}
