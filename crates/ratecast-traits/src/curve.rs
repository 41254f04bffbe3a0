//! Forward curve data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// One month's published reference rate.
///
/// The rate is a decimal fraction (0.0432, not 4.32) held exactly; points
/// are immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Reset date of the published rate
    pub date: NaiveDate,
    /// Reference rate as a decimal fraction
    pub rate: Decimal,
}

/// An ordered forward curve: points ascending by date, no duplicates.
///
/// Construction sorts, so downstream prefix truncation never depends on the
/// layout order of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardCurve {
    points: Vec<CurvePoint>,
}

impl ForwardCurve {
    /// Build a curve from decoded points.
    ///
    /// Points are sorted ascending by date. Fails on an empty point set or
    /// when two points share a date.
    pub fn new(mut points: Vec<CurvePoint>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }

        points.sort_by_key(|p| p.date);

        if let Some(w) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(CurveError::DuplicateDate(w[0].date));
        }

        Ok(Self { points })
    }

    /// The curve points, ascending by date.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// The earliest date on the curve.
    ///
    /// This doubles as the freshness marker of a stored snapshot.
    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points (never true for a constructed curve).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
