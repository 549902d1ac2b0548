use serde::{Deserialize, Serialize};

use crate::core::range::DoubleRange;

/// Zoom state expressed as fractions of the actual range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub zoom_factor: f64,
    pub zoom_position: f64,
}

impl Default for AxisScale {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            zoom_position: 0.0,
        }
    }
}

impl AxisScale {
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.zoom_factor != 1.0
    }
}

/// Derives the visible sub-range from the actual range and a zoom state.
///
/// The window keeps its requested width and is shifted back inside the
/// actual range when the position would push it past either bound. A zoom
/// factor of exactly one returns the actual range without touching the
/// clamping path.
#[must_use]
pub fn visible_range(actual: DoubleRange, scale: AxisScale) -> DoubleRange {
    if actual.is_empty() {
        return actual;
    }
    if !scale.zoom_factor.is_finite()
        || !scale.zoom_position.is_finite()
        || scale.zoom_factor >= 1.0
        || scale.zoom_factor <= 0.0
    {
        return actual;
    }

    let delta = actual.delta();
    let mut start = actual.start() + scale.zoom_position * delta;
    let mut end = start + scale.zoom_factor * delta;

    if start < actual.start() {
        end += actual.start() - start;
        start = actual.start();
    }
    if end > actual.end() {
        start -= end - actual.end();
        end = actual.end();
    }
    if start < actual.start() {
        start = actual.start();
    }

    DoubleRange::new(start, end)
}

/// Inverse of `visible_range`: recovers the zoom state a visible range
/// corresponds to within its actual range.
#[must_use]
pub fn axis_scale_from_visible(actual: DoubleRange, visible: DoubleRange) -> AxisScale {
    let delta = actual.delta();
    if actual.is_empty() || visible.is_empty() || delta <= 0.0 {
        return AxisScale::default();
    }

    AxisScale {
        zoom_factor: visible.delta() / delta,
        zoom_position: (visible.start() - actual.start()) / delta,
    }
}

/// Which end of the actual range an auto-scroll window is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoScrollAnchor {
    Start,
    #[default]
    End,
}

/// Visible range for a trailing (or leading) window of width `delta`,
/// expressed in the axis's own unit.
#[must_use]
pub fn auto_scroll_range(actual: DoubleRange, delta: f64, anchor: AutoScrollAnchor) -> DoubleRange {
    if actual.is_empty() || !delta.is_finite() || delta <= 0.0 || delta >= actual.delta() {
        return actual;
    }

    match anchor {
        AutoScrollAnchor::Start => DoubleRange::new(actual.start(), actual.start() + delta),
        AutoScrollAnchor::End => DoubleRange::new(actual.end() - delta, actual.end()),
    }
}
