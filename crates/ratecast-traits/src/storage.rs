//! Curve snapshot storage trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::curve::ForwardCurve;
use crate::error::StoreError;

/// Persisted forward-curve snapshot.
///
/// The store holds at most one snapshot at a time: every accepted write is a
/// full replace, never an append or merge. The minimum stored date acts as a
/// freshness marker; the store is never queried by range. The skip policy
/// (when a write is redundant) belongs to the engine, not the backend.
///
/// Storage backends are EXTENSIONS (e.g., redb). The handle is constructed
/// once at process start and injected into the engine.
#[async_trait]
pub trait CurveStore: Send + Sync {
    /// The minimum stored date, or `None` when nothing has been stored yet.
    async fn freshness_marker(&self) -> Result<Option<NaiveDate>, StoreError>;

    /// Replace the entire stored snapshot with `curve`.
    async fn replace_all(&self, curve: &ForwardCurve) -> Result<(), StoreError>;
}
