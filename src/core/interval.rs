use crate::core::range::DoubleRange;
use crate::core::types::{AvailableSize, AxisOrientation};

/// Candidate multipliers for the nice-interval refinement loop.
///
/// The descending order is load-bearing: the loop keeps shrinking the
/// candidate until the next one would exceed the desired tick density,
/// so reordering changes the visual density of every axis.
const INTERVAL_DIVS: [f64; 4] = [10.0, 5.0, 2.0, 1.0];

/// Horizontal axes get fewer ticks per pixel than vertical ones because
/// labels run along the reading direction.
const HORIZONTAL_DENSITY: f64 = 0.54;

/// Selects a "nice" tick interval for `range` targeting `desired_count` ticks.
///
/// The interval is a power of ten scaled by 1, 2, 5, or 10, chosen so the
/// resulting tick count stays at or below `desired_count`. Returns NaN for a
/// degenerate range or count; callers substitute a default range before
/// calling, and the engine treats a NaN interval as "keep the previous one".
#[must_use]
pub fn nice_interval(range: DoubleRange, desired_count: f64) -> f64 {
    let delta = range.delta();
    if !delta.is_finite() || delta <= 0.0 || !desired_count.is_finite() || desired_count <= 0.0 {
        return f64::NAN;
    }

    let mut interval = delta / desired_count;
    let magnitude = 10f64.powf(interval.log10().floor());
    for multiplier in INTERVAL_DIVS {
        let candidate = magnitude * multiplier;
        if desired_count < delta / candidate {
            break;
        }
        interval = candidate;
    }

    interval
}

/// Derives the desired tick count from the layout size and the label budget.
///
/// `maximum_labels` is a per-100-pixels budget. Rotated labels on a
/// horizontal axis pack tighter, so the count is scaled up by
/// `1 + 0.3 * sin(|rotation|)`.
#[must_use]
pub fn desired_interval_count(
    available: AvailableSize,
    orientation: AxisOrientation,
    maximum_labels: f64,
    label_rotation_degrees: f64,
) -> f64 {
    let extent = orientation.extent(available);
    if !extent.is_finite() || extent <= 0.0 {
        return 1.0;
    }

    let density = if orientation.is_vertical() {
        1.0
    } else {
        HORIZONTAL_DENSITY
    };
    let mut desired = extent * density * maximum_labels / 100.0;

    if !orientation.is_vertical()
        && label_rotation_degrees.is_finite()
        && label_rotation_degrees != 0.0
    {
        desired *= 1.0 + 0.3 * label_rotation_degrees.to_radians().abs().sin();
    }

    desired.max(1.0)
}
