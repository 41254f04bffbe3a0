//! Request and response shapes for the rate-curve operation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied loan parameters.
///
/// `rate_floor <= rate_ceiling` is a recommended invariant, not an enforced
/// one: when the floor exceeds the ceiling the min-then-max clamp pins every
/// result to the ceiling, and the boundary logs a warning instead of
/// rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRequest {
    /// End date of the loan; months past this date are excluded
    pub maturity_date: NaiveDate,
    /// Minimum allowed interest rate
    pub rate_floor: Decimal,
    /// Maximum allowed interest rate
    pub rate_ceiling: Decimal,
    /// Spread added on top of each month's reference rate
    pub rate_spread: Decimal,
}

/// One month's final interest rate, up to the maturity date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRate {
    /// The month the rate applies to
    pub date: NaiveDate,
    /// The adjusted rate, rounded to 5 decimal places
    pub rate: f64,
}
