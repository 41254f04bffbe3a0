//! Integration tests for the Ratecast server API endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bytes::Bytes;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use ratecast_engine::{RateEngine, RateEngineBuilder};
use ratecast_ext_redb::RedbCurveStore;
use ratecast_server::routes::create_router;
use ratecast_traits::{
    CurveDecoder, CurvePoint, DecodeError, DocumentSource, FetchedDocument, ForwardCurve,
    SourceError,
};

/// Source serving a fixed in-memory document.
struct StubSource {
    fail: bool,
}

#[async_trait]
impl DocumentSource for StubSource {
    async fn fetch(&self) -> Result<FetchedDocument, SourceError> {
        if self.fail {
            return Err(SourceError::Http { status: 404 });
        }
        Ok(FetchedDocument {
            bytes: Bytes::from_static(b"workbook"),
            is_current_day: true,
        })
    }
}

/// Decoder ignoring the document and returning a fixture curve.
struct StubDecoder(ForwardCurve);

impl CurveDecoder for StubDecoder {
    fn decode(&self, _bytes: &[u8]) -> Result<ForwardCurve, DecodeError> {
        Ok(self.0.clone())
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture_curve() -> ForwardCurve {
    ForwardCurve::new(vec![
        CurvePoint { date: ymd(2025, 6, 26), rate: dec!(0.03) },
        CurvePoint { date: ymd(2025, 7, 26), rate: dec!(0.01) },
        CurvePoint { date: ymd(2025, 8, 26), rate: dec!(0.06) },
        CurvePoint { date: ymd(2025, 9, 26), rate: dec!(0.04) },
    ])
    .unwrap()
}

/// Create a test engine with stub source/decoder and an in-memory store.
fn create_test_engine(fail_source: bool) -> Arc<RateEngine> {
    let store = RedbCurveStore::in_memory().expect("Failed to create memory store");

    let engine = RateEngineBuilder::new()
        .with_source(Arc::new(StubSource { fail: fail_source }))
        .with_decoder(Arc::new(StubDecoder(fixture_curve())))
        .with_store(Arc::new(store))
        .build()
        .expect("Failed to build engine");

    Arc::new(engine)
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = create_router(create_test_engine(false));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn rate_curve_returns_adjusted_schedule() {
    let app = create_router(create_test_engine(false));

    let request_body = json!({
        "maturity_date": "2025-08-30",
        "rate_floor": 0.02,
        "rate_ceiling": 0.05,
        "rate_spread": 0.01,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/rate-curve")
                .header("content-type", "application/json")
                .body(Body::from(request_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!([
            { "date": "2025-06-26", "rate": 0.04 },
            { "date": "2025-07-26", "rate": 0.02 },
            { "date": "2025-08-26", "rate": 0.05 },
        ])
    );
}

#[tokio::test]
async fn rate_curve_with_inverted_bounds_pins_to_ceiling() {
    let app = create_router(create_test_engine(false));

    let request_body = json!({
        "maturity_date": "2025-08-30",
        "rate_floor": 0.05,
        "rate_ceiling": 0.02,
        "rate_spread": 0.0,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/rate-curve")
                .header("content-type", "application/json")
                .body(Body::from(request_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Flagged in the logs but still processed.
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    for rate in body.as_array().unwrap() {
        assert_eq!(rate["rate"], json!(0.02));
    }
}

#[tokio::test]
async fn malformed_request_is_a_client_error() {
    let app = create_router(create_test_engine(false));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/rate-curve")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"maturity_date": "not-a-date"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn pipeline_failure_is_a_server_error() {
    let app = create_router(create_test_engine(true));

    let request_body = json!({
        "maturity_date": "2025-08-30",
        "rate_floor": 0.02,
        "rate_ceiling": 0.05,
        "rate_spread": 0.01,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/rate-curve")
                .header("content-type", "application/json")
                .body(Body::from(request_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("rate curve request failed"));
}
