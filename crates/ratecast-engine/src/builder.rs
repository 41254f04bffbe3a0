//! Builder pattern for the rate engine.

use std::sync::Arc;

use ratecast_traits::{CurveDecoder, CurveStore, DocumentSource};

use crate::engine::RateEngine;
use crate::error::EngineError;

/// Builder for constructing a [`RateEngine`].
pub struct RateEngineBuilder {
    source: Option<Arc<dyn DocumentSource>>,
    decoder: Option<Arc<dyn CurveDecoder>>,
    store: Option<Arc<dyn CurveStore>>,
}

impl RateEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            source: None,
            decoder: None,
            store: None,
        }
    }

    /// Set the document source.
    pub fn with_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the curve decoder.
    pub fn with_decoder(mut self, decoder: Arc<dyn CurveDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Set the snapshot store.
    pub fn with_store(mut self, store: Arc<dyn CurveStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the rate engine.
    pub fn build(self) -> Result<RateEngine, EngineError> {
        let source = self
            .source
            .ok_or_else(|| EngineError::Configuration("source not configured".into()))?;

        let decoder = self
            .decoder
            .ok_or_else(|| EngineError::Configuration("decoder not configured".into()))?;

        let store = self
            .store
            .ok_or_else(|| EngineError::Configuration("store not configured".into()))?;

        Ok(RateEngine {
            source,
            decoder,
            store,
        })
    }
}

impl Default for RateEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
