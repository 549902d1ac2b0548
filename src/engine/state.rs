use serde::Serialize;

use crate::core::range::DoubleRange;
use crate::core::zoom::AxisScale;

/// One rendered axis label. Rebuilt from scratch on every pass, never diffed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub position: f64,
    pub content: String,
    pub visible: bool,
}

impl Label {
    #[must_use]
    pub fn new(position: f64, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            visible: true,
        }
    }
}

/// Full output of one `recalculate` pass.
///
/// Owned by a single axis and read by the host's layout/render step after
/// the pass returns; no partial state survives between passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisState {
    pub actual_range: DoubleRange,
    pub actual_interval: f64,
    pub visible_range: DoubleRange,
    pub visible_interval: f64,
    pub scale: AxisScale,
    pub tick_positions: Vec<f64>,
    pub minor_tick_positions: Vec<f64>,
    pub visible_labels: Vec<Label>,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            actual_range: DoubleRange::EMPTY,
            actual_interval: 1.0,
            visible_range: DoubleRange::EMPTY,
            visible_interval: 1.0,
            scale: AxisScale::default(),
            tick_positions: Vec::new(),
            minor_tick_positions: Vec::new(),
            visible_labels: Vec::new(),
        }
    }
}

impl AxisState {
    /// Serializes the pass output for snapshot tooling and debugging hosts.
    pub fn to_json_pretty(&self) -> crate::error::AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            crate::error::AxisError::InvalidData(format!("state serialization failed: {err}"))
        })
    }

    /// Maps an axis value onto the unit interval of the visible range.
    ///
    /// Used by renderers to place ticks and gridlines; out-of-window values
    /// clamp to the nearest edge.
    #[must_use]
    pub fn value_to_coefficient(&self, value: f64) -> f64 {
        let delta = self.visible_range.delta();
        if self.visible_range.is_empty() || delta <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - self.visible_range.start()) / delta).clamp(0.0, 1.0)
    }

    /// Inverse of `value_to_coefficient`.
    #[must_use]
    pub fn coefficient_to_value(&self, coefficient: f64) -> f64 {
        if self.visible_range.is_empty() || !coefficient.is_finite() {
            return f64::NAN;
        }
        self.visible_range.start() + coefficient.clamp(0.0, 1.0) * self.visible_range.delta()
    }
}
