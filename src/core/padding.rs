use serde::{Deserialize, Serialize};

use crate::core::interval::nice_interval;
use crate::core::range::DoubleRange;

/// Padding policy applied to a numeric axis after the actual range is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericPaddingMode {
    #[default]
    Auto,
    None,
    Normal,
    Round,
    RoundStart,
    RoundEnd,
    PrependInterval,
    AppendInterval,
    Additional,
}

/// Result of a padding pass. `Normal` padding may recompute the interval
/// when the padded minimum lands on zero, so the interval travels with the
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedRange {
    pub range: DoubleRange,
    pub interval: f64,
}

/// Expands `range` by up to one `interval` according to `mode`.
///
/// `polar_seeded` reports whether the axis was registered by a polar-area
/// series; it only matters for `Auto`, which rounds for polar plots and
/// otherwise leaves the range untouched.
#[must_use]
pub fn apply_numeric_padding(
    range: DoubleRange,
    interval: f64,
    mode: NumericPaddingMode,
    desired_count: f64,
    polar_seeded: bool,
) -> PaddedRange {
    let unchanged = PaddedRange { range, interval };
    if range.is_empty() || !interval.is_finite() || interval <= 0.0 {
        return unchanged;
    }

    let rounded = round_to_grid(range, interval);
    let range = match mode {
        NumericPaddingMode::None => range,
        NumericPaddingMode::Auto => {
            if polar_seeded {
                rounded
            } else {
                range
            }
        }
        NumericPaddingMode::Normal => return normal_padding(range, interval, desired_count),
        NumericPaddingMode::Round => rounded,
        NumericPaddingMode::RoundStart => DoubleRange::new(rounded.start(), range.end()),
        NumericPaddingMode::RoundEnd => DoubleRange::new(range.start(), rounded.end()),
        NumericPaddingMode::PrependInterval => {
            DoubleRange::new(rounded.start() - interval, rounded.end())
        }
        NumericPaddingMode::AppendInterval => {
            DoubleRange::new(rounded.start(), rounded.end() + interval)
        }
        NumericPaddingMode::Additional => {
            DoubleRange::new(rounded.start() - interval, rounded.end() + interval)
        }
    };

    PaddedRange { range, interval }
}

fn round_to_grid(range: DoubleRange, interval: f64) -> DoubleRange {
    DoubleRange::new(
        (range.start() / interval).floor() * interval,
        (range.end() / interval).ceil() * interval,
    )
}

/// The asymmetric "nice-looking chart" heuristic.
///
/// Bounds are padded by one twentieth and snapped onto the interval grid.
/// The 0.365-interval threshold decides whether a bound that lands close to
/// a grid line is pushed one whole extra interval outward; the constant is
/// empirically tuned in the original engine and must not be altered.
fn normal_padding(range: DoubleRange, interval: f64, desired_count: f64) -> PaddedRange {
    let start = range.start();
    let end = range.end();
    let delta = range.delta();
    let mut interval = interval;

    let mut minimum;
    if start < 0.0 {
        minimum = start + start / 20.0;
        let remaining = interval + minimum % interval;
        if 0.365 * interval >= remaining {
            minimum -= interval;
        }
        if minimum % interval < 0.0 {
            minimum = (minimum - interval) - minimum % interval;
        }
    } else {
        minimum = if start < (5.0 / 6.0) * end {
            0.0
        } else {
            start - delta / 2.0
        };
        if minimum % interval > 0.0 {
            minimum -= minimum % interval;
        }
    }

    let mut maximum = end + delta / 20.0;
    let remaining = interval - maximum % interval;
    if 0.365 * interval >= remaining {
        maximum += interval;
    }
    if maximum % interval > 0.0 {
        maximum = (maximum + interval) - maximum % interval;
    }

    if minimum == 0.0 {
        // With a zero-anchored axis the original engine re-selects the
        // interval over the padded span and re-snaps the maximum onto it.
        let recomputed = nice_interval(DoubleRange::new(0.0, maximum), desired_count);
        if recomputed.is_finite() && recomputed > 0.0 {
            interval = recomputed;
        }
        maximum = (maximum / interval).ceil() * interval;
    }

    PaddedRange {
        range: DoubleRange::new(minimum, maximum),
        interval,
    }
}
