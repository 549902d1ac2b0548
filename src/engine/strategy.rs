use crate::core::calendar::{self, DateTimeIntervalType};
use crate::core::date_padding::apply_date_padding;
use crate::core::interval::nice_interval;
use crate::core::padding::{PaddedRange, apply_numeric_padding};
use crate::core::range::DoubleRange;
use crate::engine::config::AxisConfig;
use crate::engine::labels::{
    LabelSet, datetime_labels, format_numeric_label, format_oa_date, indexed_labels,
    minor_tick_positions, numeric_labels,
};
use crate::engine::series::{
    AxisValues, SeriesSource, active_series, aggregate_range, group_categories,
};

/// Inputs shared by every step of one recalculate pass.
pub struct PassInputs<'a> {
    pub config: &'a AxisConfig,
    pub series: &'a [SeriesSource],
    pub desired_count: f64,
}

/// Resolved window handed to label generation.
#[derive(Debug, Clone, Copy)]
pub struct LabelFrame {
    pub visible_range: DoubleRange,
    pub visible_interval: f64,
    pub zoom_factor: f64,
}

/// Per-axis-kind capability set. One strategy instance lives inside one
/// engine; methods take `&mut self` so a pass can carry resolved
/// intermediate state (the date granularity) from interval selection into
/// padding and label generation.
pub trait AxisRangeStrategy {
    fn calculate_actual_range(&mut self, inputs: &PassInputs<'_>) -> DoubleRange;

    fn calculate_actual_interval(&mut self, range: DoubleRange, inputs: &PassInputs<'_>) -> f64;

    fn apply_range_padding(
        &mut self,
        range: DoubleRange,
        interval: f64,
        inputs: &PassInputs<'_>,
    ) -> PaddedRange;

    fn generate_visible_labels(&mut self, frame: &LabelFrame, inputs: &PassInputs<'_>)
    -> LabelSet;
}

/// Fixed fallback for date axes with no usable data: 1900-01-01..1900-01-02
/// in OA days.
const DEFAULT_DATE_RANGE: DoubleRange = DoubleRange::new(2.0, 3.0);

const DEFAULT_NUMERIC_RANGE: DoubleRange = DoubleRange::new(0.0, 1.0);

/// Applies user minimum/maximum overrides onto an aggregated range, then
/// substitutes the kind default for empty or zero-delta results so every
/// downstream division by delta stays safe.
fn resolve_actual_range(
    aggregate: DoubleRange,
    config: &AxisConfig,
    default_range: DoubleRange,
) -> DoubleRange {
    let overridden = match (config.minimum_override, config.maximum_override) {
        (None, None) => aggregate,
        (Some(minimum), Some(maximum)) => DoubleRange::new(minimum, maximum),
        (Some(minimum), None) => {
            let end = if aggregate.is_empty() || aggregate.end() <= minimum {
                minimum + default_range.delta()
            } else {
                aggregate.end()
            };
            DoubleRange::new(minimum, end)
        }
        (None, Some(maximum)) => {
            let start = if aggregate.is_empty() || aggregate.start() >= maximum {
                maximum - default_range.delta()
            } else {
                aggregate.start()
            };
            DoubleRange::new(start, maximum)
        }
    };

    if overridden.is_empty() || !overridden.start().is_finite() || !overridden.end().is_finite() {
        return default_range;
    }
    if overridden.delta() == 0.0 {
        return DoubleRange::new(overridden.start(), overridden.start() + default_range.delta());
    }
    overridden
}

/// Keeps explicitly pinned bounds pinned through a padding pass.
pub(crate) fn reapply_pinned_bounds(range: DoubleRange, config: &AxisConfig) -> DoubleRange {
    let start = config.minimum_override.unwrap_or(range.start());
    let end = config.maximum_override.unwrap_or(range.end());
    DoubleRange::new(start, end)
}

/// Continuous numeric axis.
#[derive(Debug, Default)]
pub struct NumericStrategy;

impl AxisRangeStrategy for NumericStrategy {
    fn calculate_actual_range(&mut self, inputs: &PassInputs<'_>) -> DoubleRange {
        let aggregate = aggregate_range(inputs.series, inputs.config.orientation);
        resolve_actual_range(aggregate, inputs.config, DEFAULT_NUMERIC_RANGE)
    }

    fn calculate_actual_interval(&mut self, range: DoubleRange, inputs: &PassInputs<'_>) -> f64 {
        nice_interval(range, inputs.desired_count)
    }

    fn apply_range_padding(
        &mut self,
        range: DoubleRange,
        interval: f64,
        inputs: &PassInputs<'_>,
    ) -> PaddedRange {
        let polar_seeded = inputs.series.first().is_some_and(|series| series.is_polar);
        apply_numeric_padding(
            range,
            interval,
            inputs.config.numeric_padding,
            inputs.desired_count,
            polar_seeded,
        )
    }

    fn generate_visible_labels(
        &mut self,
        frame: &LabelFrame,
        inputs: &PassInputs<'_>,
    ) -> LabelSet {
        let labels = numeric_labels(
            frame.visible_range,
            frame.visible_interval,
            inputs.config.edge_labels,
            frame.zoom_factor,
        );
        let minors = minor_tick_positions(
            frame.visible_range,
            frame.visible_interval,
            inputs.config.minor_ticks_per_interval,
        );
        LabelSet::from_labels(labels, minors)
    }
}

/// Continuous date-time axis over OA-date values.
#[derive(Debug, Default)]
pub struct DateTimeStrategy {
    resolved: DateTimeIntervalType,
}

impl AxisRangeStrategy for DateTimeStrategy {
    fn calculate_actual_range(&mut self, inputs: &PassInputs<'_>) -> DoubleRange {
        let aggregate = aggregate_range(inputs.series, inputs.config.orientation);
        resolve_actual_range(aggregate, inputs.config, DEFAULT_DATE_RANGE)
    }

    fn calculate_actual_interval(&mut self, range: DoubleRange, inputs: &PassInputs<'_>) -> f64 {
        let (interval, granularity) =
            calendar::resolve_granularity(range, inputs.desired_count, inputs.config.interval_type);
        self.resolved = granularity;
        interval
    }

    fn apply_range_padding(
        &mut self,
        range: DoubleRange,
        interval: f64,
        inputs: &PassInputs<'_>,
    ) -> PaddedRange {
        let padded = apply_date_padding(range, interval, self.resolved, inputs.config.date_padding);
        PaddedRange {
            range: padded,
            interval,
        }
    }

    fn generate_visible_labels(
        &mut self,
        frame: &LabelFrame,
        inputs: &PassInputs<'_>,
    ) -> LabelSet {
        let labels = datetime_labels(
            frame.visible_range,
            frame.visible_interval,
            self.resolved,
            inputs.config.label_format.as_deref(),
            inputs.config.edge_labels,
            frame.zoom_factor,
        );
        let minor_interval_days = frame.visible_interval * self.resolved.unit_days();
        let minors = minor_tick_positions(
            frame.visible_range,
            minor_interval_days,
            inputs.config.minor_ticks_per_interval,
        );
        LabelSet::from_labels(labels, minors)
    }
}

/// Discrete category axis: positions are data-point indices.
#[derive(Debug, Default)]
pub struct CategoryStrategy;

impl CategoryStrategy {
    fn index_count(inputs: &PassInputs<'_>) -> usize {
        if inputs.config.arrange_by_index {
            active_series(inputs.series)
                .map(SeriesSource::points_count)
                .unwrap_or(0)
        } else {
            group_categories(inputs.series).categories.len()
        }
    }
}

/// Index-domain actual range shared by the two category axis kinds.
fn index_domain_range(point_count: usize, inputs: &PassInputs<'_>) -> DoubleRange {
    let aggregate = if point_count == 0 {
        DoubleRange::EMPTY
    } else {
        DoubleRange::new(0.0, (point_count - 1) as f64)
    };
    resolve_actual_range(aggregate, inputs.config, DEFAULT_NUMERIC_RANGE)
}

/// Index-domain interval: whole indices only, floored at one.
fn index_domain_interval(range: DoubleRange, desired_count: f64) -> f64 {
    if range.is_empty() || desired_count <= 0.0 {
        return 1.0;
    }
    (range.delta() / desired_count).floor().max(1.0)
}

impl AxisRangeStrategy for CategoryStrategy {
    fn calculate_actual_range(&mut self, inputs: &PassInputs<'_>) -> DoubleRange {
        index_domain_range(Self::index_count(inputs), inputs)
    }

    fn calculate_actual_interval(&mut self, range: DoubleRange, inputs: &PassInputs<'_>) -> f64 {
        index_domain_interval(range, inputs.desired_count)
    }

    fn apply_range_padding(
        &mut self,
        range: DoubleRange,
        interval: f64,
        _inputs: &PassInputs<'_>,
    ) -> PaddedRange {
        // Category domains never pad; indices are exact.
        PaddedRange { range, interval }
    }

    fn generate_visible_labels(
        &mut self,
        frame: &LabelFrame,
        inputs: &PassInputs<'_>,
    ) -> LabelSet {
        // Grouped mode merges every series' category values once per pass.
        let grouped =
            (!inputs.config.arrange_by_index).then(|| group_categories(inputs.series));
        let active = active_series(inputs.series);

        let labels = indexed_labels(
            frame.visible_range,
            frame.visible_interval,
            |index| match &grouped {
                Some(grouped) => grouped.categories.get(index).cloned(),
                None => match &active?.x_values {
                    AxisValues::Category(values) => values.get(index).cloned(),
                    AxisValues::Numeric(values) => {
                        values.get(index).map(|value| format_numeric_label(*value))
                    }
                },
            },
            inputs.config.edge_labels,
            frame.zoom_factor,
        );
        LabelSet::from_labels(labels, Vec::new())
    }
}

/// Category axis whose underlying point values are dates; indices walk like
/// a category axis while content formats the per-index date at the resolved
/// granularity.
#[derive(Debug, Default)]
pub struct DateTimeCategoryStrategy {
    resolved: DateTimeIntervalType,
}

impl DateTimeCategoryStrategy {
    fn date_values<'a>(inputs: &PassInputs<'a>) -> Option<&'a [f64]> {
        match &active_series(inputs.series)?.x_values {
            AxisValues::Numeric(values) => Some(values.as_slice()),
            AxisValues::Category(_) => None,
        }
    }

    fn resolve_from_values(&mut self, inputs: &PassInputs<'_>) {
        let span = Self::date_values(inputs)
            .map(|values| {
                let mut range = DoubleRange::EMPTY;
                for value in values {
                    range += *value;
                }
                range
            })
            .unwrap_or(DoubleRange::EMPTY);
        let span = if span.is_empty() || span.delta() == 0.0 {
            DEFAULT_DATE_RANGE
        } else {
            span
        };

        let (_, granularity) =
            calendar::resolve_granularity(span, inputs.desired_count, inputs.config.interval_type);
        self.resolved = granularity;
    }
}

impl AxisRangeStrategy for DateTimeCategoryStrategy {
    fn calculate_actual_range(&mut self, inputs: &PassInputs<'_>) -> DoubleRange {
        let count = active_series(inputs.series)
            .map(SeriesSource::points_count)
            .unwrap_or(0);
        index_domain_range(count, inputs)
    }

    fn calculate_actual_interval(&mut self, range: DoubleRange, inputs: &PassInputs<'_>) -> f64 {
        self.resolve_from_values(inputs);
        index_domain_interval(range, inputs.desired_count)
    }

    fn apply_range_padding(
        &mut self,
        range: DoubleRange,
        interval: f64,
        _inputs: &PassInputs<'_>,
    ) -> PaddedRange {
        PaddedRange { range, interval }
    }

    fn generate_visible_labels(
        &mut self,
        frame: &LabelFrame,
        inputs: &PassInputs<'_>,
    ) -> LabelSet {
        let pattern = inputs
            .config
            .label_format
            .clone()
            .unwrap_or_else(|| self.resolved.default_label_format().to_owned());

        let values = Self::date_values(inputs);
        let labels = indexed_labels(
            frame.visible_range,
            frame.visible_interval,
            |index| {
                let value = *values?.get(index)?;
                Some(format_oa_date(value, &pattern))
            },
            inputs.config.edge_labels,
            frame.zoom_factor,
        );
        LabelSet::from_labels(labels, Vec::new())
    }
}
