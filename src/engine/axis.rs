use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::interval::desired_interval_count;
use crate::core::range::DoubleRange;
use crate::core::types::AvailableSize;
use crate::core::zoom::{auto_scroll_range, axis_scale_from_visible, visible_range};
use crate::engine::config::AxisConfig;
use crate::engine::series::SeriesSource;
use crate::engine::state::{AxisState, Label};
use crate::engine::strategy::{
    AxisRangeStrategy, CategoryStrategy, DateTimeCategoryStrategy, DateTimeStrategy, LabelFrame,
    NumericStrategy, PassInputs, reapply_pinned_bounds,
};

/// Which of the four range/label algorithms an axis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    Category,
    Numeric,
    DateTime,
    DateTimeCategory,
}

impl AxisKind {
    fn build_strategy(self) -> Box<dyn AxisRangeStrategy> {
        match self {
            Self::Category => Box::new(CategoryStrategy),
            Self::Numeric => Box::new(NumericStrategy),
            Self::DateTime => Box::<DateTimeStrategy>::default(),
            Self::DateTimeCategory => Box::<DateTimeCategoryStrategy>::default(),
        }
    }
}

/// Optional host hook run over each generated label, replacing the
/// overridable label-creation method of classic axis class hierarchies.
pub type LabelHook = Box<dyn Fn(&mut Label) + Send>;

/// Per-axis orchestrator: aggregates series ranges, selects intervals,
/// pads, applies zoom or auto-scroll, and generates labels, in that order.
///
/// Fully synchronous and re-entrant: each `recalculate` call recomputes the
/// whole state from scratch; nothing partial survives between calls.
pub struct AxisRangeEngine {
    kind: AxisKind,
    config: AxisConfig,
    series: Vec<SeriesSource>,
    strategy: Box<dyn AxisRangeStrategy>,
    state: AxisState,
    label_hook: Option<LabelHook>,
}

impl AxisRangeEngine {
    pub fn new(kind: AxisKind, config: AxisConfig) -> crate::error::AxisResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            kind,
            strategy: kind.build_strategy(),
            config,
            series: Vec::new(),
            state: AxisState::default(),
            label_hook: None,
        })
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AxisConfig) -> crate::error::AxisResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Replaces the registered series snapshot used by the next pass.
    pub fn set_series(&mut self, series: Vec<SeriesSource>) {
        self.series = series;
    }

    pub fn set_label_hook(&mut self, hook: impl Fn(&mut Label) + Send + 'static) {
        self.label_hook = Some(Box::new(hook));
    }

    #[must_use]
    pub fn state(&self) -> &AxisState {
        &self.state
    }

    /// Runs one full range → interval → padding → zoom → labels pass.
    ///
    /// Never fails: degenerate inputs fall back to default unit ranges and a
    /// zero or NaN interval reuses the previous actual interval.
    pub fn recalculate(&mut self, available: AvailableSize) -> &AxisState {
        let desired_count = desired_interval_count(
            available,
            self.config.orientation,
            self.config.maximum_labels,
            self.config.label_rotation_degrees,
        );
        let inputs = PassInputs {
            config: &self.config,
            series: &self.series,
            desired_count,
        };

        let raw_range = self.strategy.calculate_actual_range(&inputs);
        trace!(
            start = raw_range.start(),
            end = raw_range.end(),
            "actual range computed"
        );

        let actual_interval = match self.config.interval_override {
            Some(interval) => interval,
            None => self.strategy.calculate_actual_interval(raw_range, &inputs),
        };
        let actual_interval = self.usable_interval(actual_interval);

        let padded = self
            .strategy
            .apply_range_padding(raw_range, actual_interval, &inputs);
        let actual_range = reapply_pinned_bounds(padded.range, &self.config);
        let actual_interval = self.usable_interval(padded.interval);

        let visible = match self.config.auto_scroll {
            Some(scroll) => auto_scroll_range(
                actual_range,
                scroll.delta_in_axis_units(),
                scroll.anchor,
            ),
            None => visible_range(actual_range, self.config.zoom),
        };
        let scale = axis_scale_from_visible(actual_range, visible);

        let visible_interval = if scale.is_zoomed() {
            let zoomed_interval = match self.config.interval_override {
                Some(interval) => interval,
                None => self.strategy.calculate_actual_interval(visible, &inputs),
            };
            self.usable_interval(zoomed_interval)
        } else {
            actual_interval
        };

        let frame = LabelFrame {
            visible_range: visible,
            visible_interval,
            zoom_factor: scale.zoom_factor,
        };
        let mut label_set = self.strategy.generate_visible_labels(&frame, &inputs);
        if let Some(hook) = &self.label_hook {
            for label in &mut label_set.labels {
                hook(label);
            }
        }

        debug!(
            kind = ?self.kind,
            actual_interval,
            visible_interval,
            labels = label_set.labels.len(),
            "axis recalculated"
        );

        self.state = AxisState {
            actual_range,
            actual_interval,
            visible_range: visible,
            visible_interval,
            scale,
            tick_positions: label_set.tick_positions,
            minor_tick_positions: label_set.minor_tick_positions,
            visible_labels: label_set.labels,
        };
        &self.state
    }

    /// Guards the label-walk loop against a zero or NaN interval by falling
    /// back to the previously computed actual interval.
    fn usable_interval(&self, interval: f64) -> f64 {
        if interval.is_finite() && interval > 0.0 {
            return interval;
        }

        let previous = self.state.actual_interval;
        let fallback = if previous.is_finite() && previous > 0.0 {
            previous
        } else {
            1.0
        };
        warn!(interval, fallback, "unusable interval, reusing previous");
        fallback
    }
}

/// Substitute used when visible ranges are supplied by value columns: the
/// host computes per-series `DoubleRange`s; this helper builds one from raw
/// values for convenience.
#[must_use]
pub fn range_from_values(values: &[f64]) -> DoubleRange {
    let mut range = DoubleRange::EMPTY;
    for value in values {
        range += *value;
    }
    range
}
