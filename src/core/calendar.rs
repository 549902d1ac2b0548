use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::interval::nice_interval;
use crate::core::range::DoubleRange;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Approximate day lengths used to convert a day span into coarse units.
/// These are deliberately calendar-naive; exact boundaries are handled by
/// the padding and label-walk code, which step real calendar dates.
const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Calendar unit an axis interval is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateTimeIntervalType {
    #[default]
    Auto,
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl DateTimeIntervalType {
    /// Length of one unit expressed in fractional days.
    ///
    /// `Auto` has no fixed length; it resolves to a concrete unit first.
    #[must_use]
    pub fn unit_days(self) -> f64 {
        match self {
            Self::Auto | Self::Days => 1.0,
            Self::Years => DAYS_PER_YEAR,
            Self::Months => DAYS_PER_MONTH,
            Self::Hours => 1.0 / 24.0,
            Self::Minutes => 1.0 / 1_440.0,
            Self::Seconds => 1.0 / 86_400.0,
            Self::Milliseconds => 1.0 / 86_400_000.0,
        }
    }

    /// Default chrono format pattern for labels at this granularity.
    #[must_use]
    pub fn default_label_format(self) -> &'static str {
        match self {
            Self::Years => "%Y",
            Self::Months => "%b-%Y",
            Self::Auto | Self::Days => "%b-%d",
            Self::Hours | Self::Minutes => "%H:%M",
            Self::Seconds => "%H:%M:%S",
            Self::Milliseconds => "%S%.3f",
        }
    }
}

/// Coarsest-first order used by `Auto` granularity detection.
const AUTO_GRANULARITY_ORDER: [DateTimeIntervalType; 7] = [
    DateTimeIntervalType::Years,
    DateTimeIntervalType::Months,
    DateTimeIntervalType::Days,
    DateTimeIntervalType::Hours,
    DateTimeIntervalType::Minutes,
    DateTimeIntervalType::Seconds,
    DateTimeIntervalType::Milliseconds,
];

/// Nice interval and concrete calendar unit for a date range spanning
/// `range` (in OA days).
///
/// Explicit units convert the day span into that unit and run the numeric
/// nice-interval selection, floored at one so fractional-unit labels never
/// repeat. `Auto` walks units coarsest-first and picks the first whose nice
/// interval reaches one whole unit; a two-year span must label in years, not
/// seconds. If even milliseconds stay fractional the span is sub-millisecond
/// and milliseconds are used anyway.
#[must_use]
pub fn resolve_granularity(
    range: DoubleRange,
    desired_count: f64,
    requested: DateTimeIntervalType,
) -> (f64, DateTimeIntervalType) {
    match requested {
        DateTimeIntervalType::Auto => {
            let mut interval = f64::NAN;
            for granularity in AUTO_GRANULARITY_ORDER {
                interval = unit_interval(range, desired_count, granularity);
                if interval >= 1.0 {
                    return (interval, granularity);
                }
            }
            (interval.max(1.0), DateTimeIntervalType::Milliseconds)
        }
        explicit => (unit_interval(range, desired_count, explicit).max(1.0), explicit),
    }
}

fn unit_interval(range: DoubleRange, desired_count: f64, granularity: DateTimeIntervalType) -> f64 {
    let span_in_unit = range.delta() / granularity.unit_days();
    nice_interval(DoubleRange::new(0.0, span_in_unit), desired_count)
}

/// OA epoch: 1899-12-30 00:00:00.
#[must_use]
pub fn oa_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("literal OA epoch date is valid")
}

/// Converts an OA day-count date into a calendar date-time.
///
/// The mapping is plainly linear for pre-epoch values as well; the historical
/// sign-mirroring of negative OA dates is not reproduced.
#[must_use]
pub fn oa_to_datetime(oa_date: f64) -> Option<NaiveDateTime> {
    if !oa_date.is_finite() {
        return None;
    }

    let millis = oa_date * MILLIS_PER_DAY;
    if millis >= (i64::MAX as f64) || millis <= (i64::MIN as f64) {
        return None;
    }

    oa_epoch().checked_add_signed(Duration::milliseconds(millis.round() as i64))
}

#[must_use]
pub fn datetime_to_oa(date_time: NaiveDateTime) -> f64 {
    let elapsed = date_time - oa_epoch();
    (elapsed.num_milliseconds() as f64) / MILLIS_PER_DAY
}

/// Steps a calendar date forward by `interval` units of `granularity`.
///
/// Whole-unit year and month steps use true calendar arithmetic (day-of-month
/// clamped at month ends); fractional or day-and-finer steps use fixed
/// durations so the walk stays uniform in OA space.
#[must_use]
pub fn advance(
    date_time: NaiveDateTime,
    granularity: DateTimeIntervalType,
    interval: f64,
) -> Option<NaiveDateTime> {
    if !interval.is_finite() || interval <= 0.0 {
        return None;
    }

    match granularity {
        DateTimeIntervalType::Years if interval.fract() == 0.0 => {
            date_time.checked_add_months(Months::new((interval as u32).saturating_mul(12)))
        }
        DateTimeIntervalType::Months if interval.fract() == 0.0 => {
            date_time.checked_add_months(Months::new(interval as u32))
        }
        _ => {
            let millis = interval * granularity.unit_days() * MILLIS_PER_DAY;
            if millis >= (i64::MAX as f64) {
                return None;
            }
            date_time.checked_add_signed(Duration::milliseconds(millis.round() as i64))
        }
    }
}

/// Last day number of the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next.and_then(|date| date.pred_opt()) {
        Some(last) => last.day(),
        None => 28,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DateTimeIntervalType, advance, datetime_to_oa, days_in_month, oa_to_datetime,
        resolve_granularity,
    };
    use crate::core::range::DoubleRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid test date")
    }

    #[test]
    fn oa_round_trip_preserves_millisecond_resolution() {
        let original = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_milli_opt(13, 45, 30, 250))
            .expect("valid test date");
        let recovered = oa_to_datetime(datetime_to_oa(original)).expect("round trip");
        assert_eq!(recovered, original);
    }

    #[test]
    fn oa_epoch_maps_to_zero() {
        assert_eq!(datetime_to_oa(super::oa_epoch()), 0.0);
        assert_eq!(oa_to_datetime(0.0), Some(super::oa_epoch()));
    }

    #[test]
    fn auto_granularity_prefers_coarsest_unit_reaching_one() {
        // A ten-year span resolves in years.
        let (interval, granularity) =
            resolve_granularity(DoubleRange::new(0.0, 3_650.0), 5.0, DateTimeIntervalType::Auto);
        assert_eq!(granularity, DateTimeIntervalType::Years);
        assert!(interval >= 1.0);

        // A 400-day span: years interval stays fractional, months qualify.
        let (interval, granularity) =
            resolve_granularity(DoubleRange::new(0.0, 400.0), 8.0, DateTimeIntervalType::Auto);
        assert_eq!(granularity, DateTimeIntervalType::Months);
        assert_eq!(interval, 2.0);
    }

    #[test]
    fn auto_granularity_falls_through_to_milliseconds() {
        let half_milli_in_days = 0.5 / 86_400_000.0;
        let (interval, granularity) = resolve_granularity(
            DoubleRange::new(0.0, half_milli_in_days),
            5.0,
            DateTimeIntervalType::Auto,
        );
        assert_eq!(granularity, DateTimeIntervalType::Milliseconds);
        assert!(interval >= 1.0);
    }

    #[test]
    fn explicit_granularity_floors_interval_at_one() {
        let (interval, granularity) =
            resolve_granularity(DoubleRange::new(0.0, 40.0), 5.0, DateTimeIntervalType::Years);
        assert_eq!(granularity, DateTimeIntervalType::Years);
        assert_eq!(interval, 1.0);
    }

    #[test]
    fn advance_clamps_month_end() {
        let jan_31 = date(2023, 1, 31);
        let stepped = advance(jan_31, DateTimeIntervalType::Months, 1.0).expect("step");
        assert_eq!(stepped, date(2023, 2, 28));
    }

    #[test]
    fn advance_steps_fixed_durations_for_fine_units() {
        let base = date(2023, 6, 1);
        let stepped = advance(base, DateTimeIntervalType::Hours, 6.0).expect("step");
        assert_eq!(
            stepped,
            NaiveDate::from_ymd_opt(2023, 6, 1)
                .and_then(|d| d.and_hms_opt(6, 0, 0))
                .expect("valid test date")
        );
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
