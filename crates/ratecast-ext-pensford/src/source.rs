//! Dated document retrieval with retry and fallback.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use tracing::{debug, warn};

use ratecast_traits::{DocumentSource, FetchedDocument, SourceError};

/// Published location of the Pensford forward-curve workbook.
///
/// `{date}` is replaced with the publication date formatted `MM.DD.YYYY`.
pub const DEFAULT_URL_TEMPLATE: &str = "https://19621209.fs1.hubspotusercontent-na1.net/hubfs/19621209/Forward%20Curves/Pensford%20Forward%20Curve%20-%20{date}.xlsx";

/// Attempts for the current day's workbook before falling back.
const TODAY_ATTEMPTS: usize = 3;

/// Fetches one workbook for one date. Split out of [`DocumentSource`] so the
/// retry ladder can be exercised without a network.
#[async_trait]
pub(crate) trait DatedFetch {
    async fn fetch_dated(&self, date: NaiveDate) -> Result<Bytes, SourceError>;
}

/// HTTP source for the Pensford forward-curve publication.
pub struct PensfordSource {
    client: Client,
    url_template: String,
}

impl PensfordSource {
    /// Create a source against a URL template containing a `{date}`
    /// placeholder.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url_template: url_template.into(),
        }
    }

    fn url_for(&self, date: NaiveDate) -> String {
        self.url_template
            .replace("{date}", &date.format("%m.%d.%Y").to_string())
    }
}

impl Default for PensfordSource {
    fn default() -> Self {
        Self::new(DEFAULT_URL_TEMPLATE)
    }
}

#[async_trait]
impl DatedFetch for PensfordSource {
    async fn fetch_dated(&self, date: NaiveDate) -> Result<Bytes, SourceError> {
        let url = self.url_for(date);
        debug!(%url, "requesting forward curve workbook");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Http {
                status: response.status().as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

#[async_trait]
impl DocumentSource for PensfordSource {
    async fn fetch(&self) -> Result<FetchedDocument, SourceError> {
        fetch_with_fallback(self, Local::now().date_naive()).await
    }
}

/// Try today's workbook up to [`TODAY_ATTEMPTS`] times, then yesterday's
/// exactly once. `is_current_day` is set only on a today-dated success.
pub(crate) async fn fetch_with_fallback<F>(
    fetcher: &F,
    today: NaiveDate,
) -> Result<FetchedDocument, SourceError>
where
    F: DatedFetch + Sync,
{
    for attempt in 1..=TODAY_ATTEMPTS {
        match fetcher.fetch_dated(today).await {
            Ok(bytes) => {
                return Ok(FetchedDocument {
                    bytes,
                    is_current_day: true,
                })
            }
            Err(e) => warn!(attempt, error = %e, "today's forward curve sheet not available"),
        }
    }

    let yesterday = today - Days::new(1);
    warn!(%yesterday, "falling back to yesterday's forward curve sheet");

    let bytes = fetcher.fetch_dated(yesterday).await?;
    Ok(FetchedDocument {
        bytes,
        is_current_day: false,
    })
}
