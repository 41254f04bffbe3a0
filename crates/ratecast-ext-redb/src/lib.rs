//! # Ratecast Ext Redb
//!
//! Embedded snapshot storage for the Ratecast pipeline using redb.
//!
//! The store holds at most one forward-curve snapshot in the
//! `forward_rates` table, keyed by ISO-8601 date string so the byte order
//! of keys is chronological and the first key is the freshness marker.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use redb::{Database, ReadableTable, TableDefinition};

use ratecast_traits::{CurveStore, ForwardCurve, StoreError};

const FORWARD_RATES: TableDefinition<&str, &[u8]> = TableDefinition::new("forward_rates");

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Redb-backed curve snapshot store.
///
/// Each operation opens and commits its own transaction; no connection is
/// held between calls.
pub struct RedbCurveStore {
    db: Arc<Database>,
}

impl RedbCurveStore {
    /// Open (or create) a store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Database(e.to_string()))?;
        }

        let db = Database::create(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Create a store backed by memory only. Intended for tests.
    pub fn in_memory() -> Result<Self, StoreError> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Number of stored curve points.
    pub fn point_count(&self) -> Result<u64, StoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let table = match read_txn.open_table(FORWARD_RATES) {
            Ok(t) => t,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(0),
            Err(e) => return Err(StoreError::Database(e.to_string())),
        };

        redb::ReadableTableMetadata::len(&table).map_err(|e| StoreError::Database(e.to_string()))
    }
}

#[async_trait]
impl CurveStore for RedbCurveStore {
    async fn freshness_marker(&self) -> Result<Option<NaiveDate>, StoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let table = match read_txn.open_table(FORWARD_RATES) {
            Ok(t) => t,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e.to_string())),
        };

        let first = table.first().map_err(|e| StoreError::Database(e.to_string()))?;
        match first {
            Some((key, _)) => {
                let date = NaiveDate::parse_from_str(key.value(), DATE_KEY_FORMAT)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }

    async fn replace_all(&self, curve: &ForwardCurve) -> Result<(), StoreError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        write_txn
            .delete_table(FORWARD_RATES)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(FORWARD_RATES)
                .map_err(|e| StoreError::Database(e.to_string()))?;

            for point in curve.points() {
                let key = point.date.format(DATE_KEY_FORMAT).to_string();
                let value = serde_json::to_vec(&point.rate)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                table
                    .insert(key.as_str(), value.as_slice())
                    .map_err(|e| StoreError::Database(e.to_string()))?;
            }
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
