//! Spread, clamp, and rounding of curve points.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;

use ratecast_traits::{ForwardCurve, MonthlyRate, RateRequest};

/// Decimal places of the final rate.
const RATE_PRECISION: u32 = 5;

/// Compute the monthly rate schedule from the first curve date through the
/// maturity date, inclusive.
///
/// Each kept point gets the spread added, is clamped into
/// `[rate_floor, rate_ceiling]` (min of the max, so an inverted pair pins to
/// the ceiling), and is rounded half-up to 5 decimal places. All arithmetic
/// stays in exact decimals; only the final value is converted to `f64`.
///
/// Iteration stops at the first date past maturity. [`ForwardCurve`] is
/// sorted on construction, so the result is exactly the ascending prefix of
/// the curve up to the bound.
pub fn adjust(request: &RateRequest, curve: &ForwardCurve) -> Vec<MonthlyRate> {
    let mut schedule = Vec::new();

    for point in curve.points() {
        if point.date > request.maturity_date {
            break;
        }

        let rate = (point.rate + request.rate_spread)
            .max(request.rate_floor)
            .min(request.rate_ceiling)
            .round_dp_with_strategy(RATE_PRECISION, RoundingStrategy::MidpointAwayFromZero);

        schedule.push(MonthlyRate {
            date: point.date,
            rate: rate.to_f64().unwrap_or_default(),
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratecast_traits::CurvePoint;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_curve() -> ForwardCurve {
        ForwardCurve::new(vec![
            CurvePoint { date: ymd(2025, 6, 26), rate: dec!(0.03) },
            CurvePoint { date: ymd(2025, 7, 26), rate: dec!(0.01) },
            CurvePoint { date: ymd(2025, 8, 26), rate: dec!(0.06) },
            CurvePoint { date: ymd(2025, 9, 26), rate: dec!(0.04) },
        ])
        .unwrap()
    }

    fn request(maturity: NaiveDate, floor: Decimal, ceiling: Decimal, spread: Decimal) -> RateRequest {
        RateRequest {
            maturity_date: maturity,
            rate_floor: floor,
            rate_ceiling: ceiling,
            rate_spread: spread,
        }
    }

    #[test]
    fn spreads_clamps_and_truncates_at_maturity() {
        let request = request(ymd(2025, 8, 30), dec!(0.02), dec!(0.05), dec!(0.01));
        let schedule = adjust(&request, &sample_curve());

        assert_eq!(
            schedule,
            vec![
                // 0.03 + 0.01 within bounds
                MonthlyRate { date: ymd(2025, 6, 26), rate: 0.04 },
                // 0.01 + 0.01 floored up to 0.02
                MonthlyRate { date: ymd(2025, 7, 26), rate: 0.02 },
                // 0.06 + 0.01 clamped down to the 0.05 ceiling
                MonthlyRate { date: ymd(2025, 8, 26), rate: 0.05 },
                // 2025-09-26 excluded: past maturity
            ]
        );
    }

    #[test]
    fn output_is_the_ascending_prefix_up_to_maturity() {
        let curve = sample_curve();

        for maturity in [
            ymd(2025, 6, 25),
            ymd(2025, 6, 26),
            ymd(2025, 8, 26),
            ymd(2026, 1, 1),
        ] {
            let request = request(maturity, dec!(0.0), dec!(1.0), dec!(0.0));
            let schedule = adjust(&request, &curve);

            let expected: Vec<_> = curve
                .points()
                .iter()
                .take_while(|p| p.date <= maturity)
                .map(|p| p.date)
                .collect();
            let dates: Vec<_> = schedule.iter().map(|r| r.date).collect();
            assert_eq!(dates, expected);
        }
    }

    #[test]
    fn empty_schedule_when_first_point_is_past_maturity() {
        let request = request(ymd(2025, 1, 1), dec!(0.02), dec!(0.05), dec!(0.01));
        assert!(adjust(&request, &sample_curve()).is_empty());
    }

    #[test]
    fn clamp_law_holds_for_ordered_bounds() {
        let floor = dec!(0.02);
        let ceiling = dec!(0.05);
        let request = request(ymd(2026, 1, 1), floor, ceiling, dec!(0.015));

        for rate in adjust(&request, &sample_curve()) {
            assert!(rate.rate >= 0.02 && rate.rate <= 0.05);
        }
    }

    #[test]
    fn inverted_bounds_pin_to_the_ceiling() {
        // floor > ceiling: min(max(x, floor), ceiling) always lands on the
        // ceiling. Flagged at the boundary, not corrected here.
        let request = request(ymd(2026, 1, 1), dec!(0.05), dec!(0.02), dec!(0.0));
        let schedule = adjust(&request, &sample_curve());

        assert!(schedule.iter().all(|r| r.rate == 0.02));
    }

    #[test]
    fn rounds_half_up_at_five_decimals() {
        let curve = ForwardCurve::new(vec![CurvePoint {
            date: ymd(2025, 6, 26),
            rate: dec!(0.030005),
        }])
        .unwrap();
        let request = request(ymd(2025, 7, 1), dec!(0.0), dec!(1.0), dec!(0.00001));

        // 0.030015 rounds half-up to 0.03002 at five decimals.
        assert_eq!(adjust(&request, &curve)[0].rate, 0.03002);
    }

    #[test]
    fn rounding_is_idempotent_at_five_decimals() {
        let value = dec!(0.04321);
        let rounded =
            value.round_dp_with_strategy(RATE_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded, value);
    }
}
