//! Pipeline orchestration.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use tracing::{debug, info};

use ratecast_traits::{CurveDecoder, CurveStore, DocumentSource, ForwardCurve, MonthlyRate, RateRequest};

use crate::adjust::adjust;
use crate::error::EngineError;

/// The rate-curve pipeline: fetch, decode, store-if-stale, adjust.
///
/// Built via [`crate::RateEngineBuilder`] from injected seams; one engine is
/// shared across requests. The adjuster always consumes the just-fetched
/// curve; the stored snapshot is a cache, never the source of the response.
pub struct RateEngine {
    pub(crate) source: Arc<dyn DocumentSource>,
    pub(crate) decoder: Arc<dyn CurveDecoder>,
    pub(crate) store: Arc<dyn CurveStore>,
}

impl RateEngine {
    /// Run the full pipeline for one request.
    pub async fn rate_curve(&self, request: &RateRequest) -> Result<Vec<MonthlyRate>, EngineError> {
        let document = self.source.fetch().await?;
        let curve = self.decoder.decode(&document.bytes)?;
        debug!(points = curve.len(), first_date = %curve.first_date(), "decoded forward curve");

        let today = Local::now().date_naive();
        self.store_if_stale(&curve, document.is_current_day, today).await?;

        Ok(adjust(request, &curve))
    }

    /// Write the curve to the store unless the stored snapshot is already as
    /// fresh as anything we could have fetched.
    ///
    /// Skip when the marker is today's date, or when it is yesterday's and
    /// the fetched curve is itself yesterday's (fallback data). Everything
    /// else is a full replace.
    async fn store_if_stale(
        &self,
        curve: &ForwardCurve,
        is_current_day: bool,
        today: NaiveDate,
    ) -> Result<(), EngineError> {
        let yesterday = today - Days::new(1);

        match self.store.freshness_marker().await? {
            Some(marker) if marker == today => {
                debug!(%marker, "forward rates already stored today, skipping write");
            }
            Some(marker) if marker == yesterday && !is_current_day => {
                debug!(%marker, "yesterday's forward rates already stored, skipping write");
            }
            _ => {
                self.store.replace_all(curve).await?;
                info!(points = curve.len(), "stored forward curve snapshot");
            }
        }

        Ok(())
    }
}
