//! Workbook decoding for the Pensford forward-curve sheet.

use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader, Xlsx, XlsxError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use ratecast_traits::{CurveDecoder, CurvePoint, DecodeError, ForwardCurve};

/// Sheet carrying the published curve.
pub const FORWARD_CURVE_SHEET: &str = "Forward Curve";

/// Banner rows above the header row.
const HEADER_SKIP_ROWS: usize = 4;

/// Header label of the reset-date column.
const DATE_HEADER: &str = "Reset Date";

/// Header label of the rate column.
const RATE_HEADER: &str = "1M Term SOFR";

/// Decoder for the Pensford forward-curve workbook.
///
/// Columns are located by header label rather than position, so a shifted
/// layout fails fast instead of silently reading the wrong data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PensfordDecoder;

impl CurveDecoder for PensfordDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ForwardCurve, DecodeError> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| DecodeError::Workbook(e.to_string()))?;

        let range = match workbook.worksheet_range(FORWARD_CURVE_SHEET) {
            Ok(range) => range,
            Err(XlsxError::WorksheetNotFound(name)) => return Err(DecodeError::SheetMissing(name)),
            Err(e) => return Err(DecodeError::Workbook(e.to_string())),
        };

        curve_from_range(&range)
    }
}

/// Decode the sheet's cell range into a curve.
///
/// The first [`HEADER_SKIP_ROWS`] rows are banner content; the next row is
/// the header row. Data rows missing either value are dropped; date cells
/// are normalized to calendar-date granularity.
fn curve_from_range(range: &Range<Data>) -> Result<ForwardCurve, DecodeError> {
    let mut rows = range.rows().skip(HEADER_SKIP_ROWS);

    let header = rows
        .next()
        .ok_or_else(|| DecodeError::ColumnMissing(DATE_HEADER.to_string()))?;
    let date_col = find_column(header, DATE_HEADER)?;
    let rate_col = find_column(header, RATE_HEADER)?;

    let mut points = Vec::new();
    for row in rows {
        let date = row.get(date_col).and_then(|cell| cell.as_date());
        let rate = row
            .get(rate_col)
            .and_then(|cell| cell.as_f64())
            .and_then(Decimal::from_f64);

        if let (Some(date), Some(rate)) = (date, rate) {
            points.push(CurvePoint { date, rate });
        }
    }

    Ok(ForwardCurve::new(points)?)
}

fn find_column(header: &[Data], name: &str) -> Result<usize, DecodeError> {
    header
        .iter()
        .position(|cell| cell.get_string().map(str::trim) == Some(name))
        .ok_or_else(|| DecodeError::ColumnMissing(name.to_string()))
}
