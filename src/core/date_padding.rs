use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::calendar::{
    DateTimeIntervalType, datetime_to_oa, days_in_month, oa_to_datetime,
};
use crate::core::range::DoubleRange;

/// Padding policy applied to a date-time axis after the actual range is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateTimePaddingMode {
    #[default]
    Auto,
    None,
    Round,
    RoundStart,
    RoundEnd,
    PrependInterval,
    AppendInterval,
    Additional,
}

/// Expands an OA-date range according to `mode`, dispatching boundary
/// computation on the *resolved* granularity.
///
/// `Auto` degrades to no padding; the original engine reserves its rounding
/// branch for the numeric polar case and date axes never take it.
/// Raw bounds may arrive swapped and are normalized first.
#[must_use]
pub fn apply_date_padding(
    range: DoubleRange,
    interval: f64,
    granularity: DateTimeIntervalType,
    mode: DateTimePaddingMode,
) -> DoubleRange {
    if range.is_empty() || !interval.is_finite() || interval <= 0.0 {
        return range;
    }
    let range = DoubleRange::ordered(range.start(), range.end());
    if matches!(mode, DateTimePaddingMode::Auto | DateTimePaddingMode::None) {
        return range;
    }

    let Some(bounds) = granularity_bounds(range, interval, granularity) else {
        return range;
    };

    match mode {
        DateTimePaddingMode::Round => DoubleRange::new(bounds.round_start, bounds.round_end),
        DateTimePaddingMode::RoundStart => DoubleRange::new(bounds.round_start, range.end()),
        DateTimePaddingMode::RoundEnd => DoubleRange::new(range.start(), bounds.round_end),
        DateTimePaddingMode::PrependInterval => {
            DoubleRange::new(bounds.additional_start, range.end())
        }
        DateTimePaddingMode::AppendInterval => {
            DoubleRange::new(range.start(), bounds.additional_end)
        }
        DateTimePaddingMode::Additional => {
            DoubleRange::new(bounds.additional_start, bounds.additional_end)
        }
        DateTimePaddingMode::Auto | DateTimePaddingMode::None => range,
    }
}

struct GranularityBounds {
    round_start: f64,
    round_end: f64,
    additional_start: f64,
    additional_end: f64,
}

fn granularity_bounds(
    range: DoubleRange,
    interval: f64,
    granularity: DateTimeIntervalType,
) -> Option<GranularityBounds> {
    match granularity {
        DateTimeIntervalType::Years => year_bounds(range, interval),
        DateTimeIntervalType::Months => month_bounds(range, interval),
        // Day-and-finer boundaries align with the OA epoch (midnight), so
        // the grid snap happens directly in OA space.
        _ => {
            let step = granularity.unit_days() * interval;
            if step <= 0.0 {
                return None;
            }
            let round_start = (range.start() / step).floor() * step;
            let round_end = (range.end() / step).ceil() * step;
            Some(GranularityBounds {
                round_start,
                round_end,
                additional_start: round_start - step,
                additional_end: round_end + step,
            })
        }
    }
}

fn year_bounds(range: DoubleRange, interval: f64) -> Option<GranularityBounds> {
    let start = oa_to_datetime(range.start())?;
    let end = oa_to_datetime(range.end())?;
    let interval_years = interval.max(1.0).round() as i32;

    let start_year = interval_years * (f64::from(start.year()) / interval).floor() as i32;
    let end_year = interval_years * (f64::from(end.year()) / interval).ceil() as i32;

    Some(GranularityBounds {
        round_start: year_start(start_year)?,
        round_end: year_end(end_year)?,
        additional_start: year_start(start_year - interval_years)?,
        additional_end: year_end(end_year + interval_years)?,
    })
}

fn year_start(year: i32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some(datetime_to_oa(date))
}

fn year_end(year: i32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(23, 59, 59)?;
    Some(datetime_to_oa(date))
}

fn month_bounds(range: DoubleRange, interval: f64) -> Option<GranularityBounds> {
    let start = oa_to_datetime(range.start())?;
    let end = oa_to_datetime(range.end())?;
    let interval_months = interval.max(1.0).round() as u32;

    let start_month =
        ((interval * (f64::from(start.month()) / interval).floor()) as u32).max(1);
    let end_month =
        ((interval * (f64::from(end.month()) / interval).ceil()) as u32).clamp(1, 12);

    let round_start = NaiveDate::from_ymd_opt(start.year(), start_month, 1)?.and_hms_opt(0, 0, 0)?;
    let round_end = month_end(end.year(), end_month)?;

    let additional_start = round_start
        .checked_sub_months(chrono::Months::new(interval_months))?;
    let (extra_year, extra_month) = shift_month(end.year(), end_month, interval_months);
    let additional_end = month_end(extra_year, extra_month)?;

    Some(GranularityBounds {
        round_start: datetime_to_oa(round_start),
        round_end: datetime_to_oa(round_end),
        additional_start: datetime_to_oa(additional_start),
        additional_end: datetime_to_oa(additional_end),
    })
}

fn month_end(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?.and_hms_opt(23, 59, 59)
}

fn shift_month(year: i32, month: u32, by: u32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(by);
    ((total.div_euclid(12)) as i32, (total.rem_euclid(12)) as u32 + 1)
}
