use serde::{Deserialize, Serialize};

use crate::core::calendar::DateTimeIntervalType;
use crate::core::date_padding::DateTimePaddingMode;
use crate::core::padding::NumericPaddingMode;
use crate::core::types::AxisOrientation;
use crate::core::zoom::{AutoScrollAnchor, AxisScale};
use crate::error::{AxisError, AxisResult};

/// Whether the exact visible-range boundaries get a forced label even when
/// they do not land on an interval multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeLabelVisibility {
    /// Boundary labels are forced only while the axis is unzoomed.
    #[default]
    Visible,
    /// Boundary labels are forced at every zoom level.
    AlwaysVisible,
    /// Boundary labels are never forced.
    None,
}

/// Trailing/leading live-window configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Window width in the axis's own unit, or in `delta_type` units for
    /// date-time axes.
    pub delta: f64,
    pub anchor: AutoScrollAnchor,
    /// Calendar unit `delta` is expressed in; `Auto` means axis units.
    pub delta_type: DateTimeIntervalType,
}

impl AutoScrollConfig {
    #[must_use]
    pub fn new(delta: f64, anchor: AutoScrollAnchor) -> Self {
        Self {
            delta,
            anchor,
            delta_type: DateTimeIntervalType::Auto,
        }
    }

    /// Window width converted into axis units (fractional days for
    /// date-time axes).
    #[must_use]
    pub fn delta_in_axis_units(self) -> f64 {
        match self.delta_type {
            DateTimeIntervalType::Auto => self.delta,
            unit => self.delta * unit.unit_days(),
        }
    }
}

/// User-configured knobs for one axis.
///
/// Validated once at engine construction or reconfiguration, so the
/// recalculate pass itself can stay infallible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    /// Label budget per 100 pixels of axis extent.
    pub maximum_labels: f64,
    pub label_rotation_degrees: f64,
    /// Explicit tick interval; `None` selects a nice interval automatically.
    pub interval_override: Option<f64>,
    pub minimum_override: Option<f64>,
    pub maximum_override: Option<f64>,
    pub numeric_padding: NumericPaddingMode,
    pub date_padding: DateTimePaddingMode,
    /// Requested date-time granularity; `Auto` resolves from the span.
    pub interval_type: DateTimeIntervalType,
    pub minor_ticks_per_interval: usize,
    pub zoom: AxisScale,
    pub auto_scroll: Option<AutoScrollConfig>,
    pub edge_labels: EdgeLabelVisibility,
    /// chrono format pattern overriding the per-granularity default.
    pub label_format: Option<String>,
    /// Category axes: walk raw per-series indices instead of the grouped
    /// category space.
    pub arrange_by_index: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            maximum_labels: 3.0,
            label_rotation_degrees: 0.0,
            interval_override: None,
            minimum_override: None,
            maximum_override: None,
            numeric_padding: NumericPaddingMode::Auto,
            date_padding: DateTimePaddingMode::Auto,
            interval_type: DateTimeIntervalType::Auto,
            minor_ticks_per_interval: 0,
            zoom: AxisScale::default(),
            auto_scroll: None,
            edge_labels: EdgeLabelVisibility::Visible,
            label_format: None,
            arrange_by_index: true,
        }
    }
}

impl AxisConfig {
    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            AxisError::InvalidConfig(format!("config serialization failed: {err}"))
        })
    }

    pub fn from_json_str(json: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            AxisError::InvalidConfig(format!("config deserialization failed: {err}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> AxisResult<Self> {
        if !self.maximum_labels.is_finite() || self.maximum_labels <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "maximum labels must be finite and > 0".to_owned(),
            ));
        }

        if !self.label_rotation_degrees.is_finite() {
            return Err(AxisError::InvalidConfig(
                "label rotation must be finite".to_owned(),
            ));
        }

        if let Some(interval) = self.interval_override {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(AxisError::InvalidConfig(
                    "interval override must be finite and > 0".to_owned(),
                ));
            }
        }

        if let (Some(minimum), Some(maximum)) = (self.minimum_override, self.maximum_override) {
            if !(minimum < maximum) {
                return Err(AxisError::InvalidConfig(
                    "minimum override must be below maximum override".to_owned(),
                ));
            }
        }
        for bound in [self.minimum_override, self.maximum_override].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(AxisError::InvalidConfig(
                    "range overrides must be finite".to_owned(),
                ));
            }
        }

        if !self.zoom.zoom_factor.is_finite()
            || self.zoom.zoom_factor <= 0.0
            || self.zoom.zoom_factor > 1.0
        {
            return Err(AxisError::InvalidConfig(
                "zoom factor must be in (0, 1]".to_owned(),
            ));
        }
        if !self.zoom.zoom_position.is_finite()
            || self.zoom.zoom_position < 0.0
            || self.zoom.zoom_position >= 1.0
        {
            return Err(AxisError::InvalidConfig(
                "zoom position must be in [0, 1)".to_owned(),
            ));
        }

        if let Some(scroll) = self.auto_scroll {
            if !scroll.delta.is_finite() || scroll.delta <= 0.0 {
                return Err(AxisError::InvalidConfig(
                    "auto-scroll delta must be finite and > 0".to_owned(),
                ));
            }
        }

        Ok(self)
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom_factor: f64, zoom_position: f64) -> Self {
        self.zoom = AxisScale {
            zoom_factor,
            zoom_position,
        };
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval_override = Some(interval);
        self
    }

    #[must_use]
    pub fn with_range_overrides(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum_override = minimum;
        self.maximum_override = maximum;
        self
    }

    #[must_use]
    pub fn with_numeric_padding(mut self, mode: NumericPaddingMode) -> Self {
        self.numeric_padding = mode;
        self
    }

    #[must_use]
    pub fn with_date_padding(mut self, mode: DateTimePaddingMode) -> Self {
        self.date_padding = mode;
        self
    }

    #[must_use]
    pub fn with_interval_type(mut self, interval_type: DateTimeIntervalType) -> Self {
        self.interval_type = interval_type;
        self
    }

    #[must_use]
    pub fn with_edge_labels(mut self, edge_labels: EdgeLabelVisibility) -> Self {
        self.edge_labels = edge_labels;
        self
    }

    #[must_use]
    pub fn with_minor_ticks(mut self, minor_ticks_per_interval: usize) -> Self {
        self.minor_ticks_per_interval = minor_ticks_per_interval;
        self
    }

    #[must_use]
    pub fn with_auto_scroll(mut self, auto_scroll: AutoScrollConfig) -> Self {
        self.auto_scroll = Some(auto_scroll);
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoScrollConfig, AxisConfig};
    use crate::core::calendar::DateTimeIntervalType;
    use crate::core::zoom::AutoScrollAnchor;

    #[test]
    fn default_config_validates() {
        assert!(AxisConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_zoom_is_rejected() {
        assert!(AxisConfig::default().with_zoom(0.0, 0.0).validate().is_err());
        assert!(AxisConfig::default().with_zoom(1.5, 0.0).validate().is_err());
        assert!(AxisConfig::default().with_zoom(0.5, 1.0).validate().is_err());
    }

    #[test]
    fn inverted_range_overrides_are_rejected() {
        let config = AxisConfig::default().with_range_overrides(Some(10.0), Some(5.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn auto_scroll_delta_converts_calendar_units_to_days() {
        let scroll = AutoScrollConfig {
            delta: 3.0,
            anchor: AutoScrollAnchor::End,
            delta_type: DateTimeIntervalType::Hours,
        };
        assert!((scroll.delta_in_axis_units() - 0.125).abs() <= 1e-12);

        let plain = AutoScrollConfig::new(30.0, AutoScrollAnchor::End);
        assert_eq!(plain.delta_in_axis_units(), 30.0);
    }
}
