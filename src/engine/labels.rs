use std::collections::HashSet;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::calendar::{DateTimeIntervalType, oa_to_datetime};
use crate::core::range::DoubleRange;
use crate::engine::config::EdgeLabelVisibility;
use crate::engine::state::Label;

/// Hard ceiling on positions emitted by one walk. An interval that is tiny
/// relative to the walked span (the unusable-interval fallback against an
/// extreme range, or a pathological override) stops here instead of
/// exhausting memory mid-pass.
const MAX_TICKS_PER_PASS: usize = 10_000;

/// Labels plus the tick sequences derived from them. Cleared and rebuilt
/// each pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    pub labels: Vec<Label>,
    pub tick_positions: Vec<f64>,
    pub minor_tick_positions: Vec<f64>,
}

impl LabelSet {
    #[must_use]
    pub(crate) fn from_labels(labels: Vec<Label>, minor_tick_positions: Vec<f64>) -> Self {
        let tick_positions = labels.iter().map(|label| label.position).collect();
        Self {
            labels,
            tick_positions,
            minor_tick_positions,
        }
    }
}

/// Formats an OA date with a chrono pattern. Unconvertible values and
/// malformed user patterns produce empty content instead of failing the
/// label pass.
#[must_use]
pub(crate) fn format_oa_date(value: f64, pattern: &str) -> String {
    use std::fmt::Write;

    let Some(date) = oa_to_datetime(value) else {
        return String::new();
    };
    let mut content = String::new();
    if write!(content, "{}", date.format(pattern)).is_err() {
        return String::new();
    }
    content
}

/// Formats a numeric label, rounding away float noise at 12 decimals.
#[must_use]
pub fn format_numeric_label(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 1e12).round() / 1e12;
    format!("{rounded}")
}

/// Walks the visible range at interval multiples and emits numeric labels.
///
/// The walk starts at the interval multiple at or below the visible start;
/// positions outside the window are skipped rather than clamped.
#[must_use]
pub fn numeric_labels(
    visible: DoubleRange,
    interval: f64,
    edge: EdgeLabelVisibility,
    zoom_factor: f64,
) -> Vec<Label> {
    let mut labels = Vec::new();
    if visible.is_empty() || !interval.is_finite() || interval <= 0.0 {
        return labels;
    }

    let mut steps = 0;
    let mut position = visible.start() - visible.start() % interval;
    while position <= visible.end() && steps < MAX_TICKS_PER_PASS {
        if visible.contains(position) {
            labels.push(Label::new(position, format_numeric_label(position)));
        }
        let next = position + interval;
        if next <= position {
            break;
        }
        position = next;
        steps += 1;
    }

    force_edge_labels(&mut labels, visible, edge, zoom_factor, |value| {
        format_numeric_label(value)
    });
    labels
}

/// Walks the visible range stepping real calendar dates and emits
/// date-time labels formatted at the resolved granularity.
#[must_use]
pub fn datetime_labels(
    visible: DoubleRange,
    interval: f64,
    granularity: DateTimeIntervalType,
    format_override: Option<&str>,
    edge: EdgeLabelVisibility,
    zoom_factor: f64,
) -> Vec<Label> {
    let mut labels = Vec::new();
    if visible.is_empty() || !interval.is_finite() || interval <= 0.0 {
        return labels;
    }

    let pattern = format_override.unwrap_or_else(|| granularity.default_label_format());
    let mut position = visible.start();
    while position <= visible.end() && labels.len() < MAX_TICKS_PER_PASS {
        labels.push(Label::new(position, format_oa_date(position, pattern)));

        let next = oa_to_datetime(position)
            .and_then(|date| crate::core::calendar::advance(date, granularity, interval))
            .map(crate::core::calendar::datetime_to_oa);
        match next {
            Some(next) if next > position => position = next,
            _ => break,
        }
    }

    force_edge_labels(&mut labels, visible, edge, zoom_factor, |value| {
        format_oa_date(value, pattern)
    });
    labels
}

/// Walks index positions (category and date-time-category axes).
///
/// Positions are data-point indices; content is resolved per rounded index
/// and missing indices produce empty-content labels only when forced as an
/// edge, otherwise they are skipped.
#[must_use]
pub fn indexed_labels(
    visible: DoubleRange,
    interval: f64,
    content_at: impl Fn(usize) -> Option<String>,
    edge: EdgeLabelVisibility,
    zoom_factor: f64,
) -> Vec<Label> {
    let mut labels = Vec::new();
    if visible.is_empty() || !interval.is_finite() || interval <= 0.0 {
        return labels;
    }

    let mut steps = 0;
    let mut position = visible.start() - visible.start() % interval;
    while position <= visible.end() && steps < MAX_TICKS_PER_PASS {
        if visible.contains(position) {
            let index = position.round();
            if index >= 0.0 {
                if let Some(content) = content_at(index as usize) {
                    labels.push(Label::new(position, content));
                }
            }
        }
        let next = position + interval;
        if next <= position {
            break;
        }
        position = next;
        steps += 1;
    }

    force_edge_labels(&mut labels, visible, edge, zoom_factor, |value| {
        let index = value.round();
        if index >= 0.0 {
            content_at(index as usize).unwrap_or_default()
        } else {
            String::new()
        }
    });
    labels
}

/// Interior minor-tick positions: each major interval split into `n + 1`
/// equal parts, boundaries of the sub-intervals emitted unlabeled.
#[must_use]
pub fn minor_tick_positions(
    visible: DoubleRange,
    interval: f64,
    minor_ticks_per_interval: usize,
) -> Vec<f64> {
    let mut positions = Vec::new();
    if visible.is_empty()
        || !interval.is_finite()
        || interval <= 0.0
        || minor_ticks_per_interval == 0
    {
        return positions;
    }

    let sub_interval = interval / (minor_ticks_per_interval as f64 + 1.0);
    let mut major = visible.start() - visible.start() % interval;
    // Step one major back so the leading partial interval still gets its
    // interior ticks.
    major -= interval;

    let mut steps = 0;
    while major <= visible.end() && steps < MAX_TICKS_PER_PASS {
        let mut batch: SmallVec<[f64; 8]> = SmallVec::new();
        for step in 1..=minor_ticks_per_interval {
            let tick = major + sub_interval * step as f64;
            if visible.contains(tick) {
                batch.push(tick);
            }
        }
        positions.extend(batch);

        let next = major + interval;
        if next <= major {
            break;
        }
        major = next;
        steps += 1;
    }

    positions
}

/// Applies the edge-label-visibility rule: force labels at the exact window
/// boundaries unless one already sits at that exact position.
fn force_edge_labels(
    labels: &mut Vec<Label>,
    visible: DoubleRange,
    edge: EdgeLabelVisibility,
    zoom_factor: f64,
    content_for: impl Fn(f64) -> String,
) {
    let forced = match edge {
        EdgeLabelVisibility::AlwaysVisible => true,
        EdgeLabelVisibility::Visible => zoom_factor == 1.0,
        EdgeLabelVisibility::None => false,
    };
    if !forced {
        return;
    }

    let occupied: HashSet<OrderedFloat<f64>> = labels
        .iter()
        .map(|label| OrderedFloat(label.position))
        .collect();

    if !occupied.contains(&OrderedFloat(visible.start())) {
        labels.insert(0, Label::new(visible.start(), content_for(visible.start())));
    }
    if !occupied.contains(&OrderedFloat(visible.end())) {
        labels.push(Label::new(visible.end(), content_for(visible.end())));
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_numeric_label, indexed_labels, minor_tick_positions, numeric_labels,
    };
    use crate::core::range::DoubleRange;
    use crate::engine::config::EdgeLabelVisibility;

    fn positions(labels: &[crate::engine::state::Label]) -> Vec<f64> {
        labels.iter().map(|label| label.position).collect()
    }

    #[test]
    fn numeric_walk_emits_interval_multiples_inside_window() {
        let labels = numeric_labels(
            DoubleRange::new(3.0, 27.0),
            10.0,
            EdgeLabelVisibility::None,
            1.0,
        );
        assert_eq!(positions(&labels), vec![10.0, 20.0]);
    }

    #[test]
    fn always_visible_forces_boundary_labels() {
        let labels = numeric_labels(
            DoubleRange::new(3.0, 27.0),
            10.0,
            EdgeLabelVisibility::AlwaysVisible,
            0.5,
        );
        assert_eq!(positions(&labels), vec![3.0, 10.0, 20.0, 27.0]);
    }

    #[test]
    fn visible_mode_forces_edges_only_when_unzoomed() {
        let zoomed = numeric_labels(
            DoubleRange::new(3.0, 27.0),
            10.0,
            EdgeLabelVisibility::Visible,
            0.5,
        );
        assert_eq!(positions(&zoomed), vec![10.0, 20.0]);

        let unzoomed = numeric_labels(
            DoubleRange::new(3.0, 27.0),
            10.0,
            EdgeLabelVisibility::Visible,
            1.0,
        );
        assert_eq!(positions(&unzoomed), vec![3.0, 10.0, 20.0, 27.0]);
    }

    #[test]
    fn aligned_boundaries_are_not_duplicated() {
        let labels = numeric_labels(
            DoubleRange::new(0.0, 30.0),
            10.0,
            EdgeLabelVisibility::AlwaysVisible,
            1.0,
        );
        assert_eq!(positions(&labels), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn numeric_content_rounds_away_float_noise() {
        assert_eq!(format_numeric_label(0.1 + 0.2), "0.3");
        assert_eq!(format_numeric_label(20.0), "20");
        assert_eq!(format_numeric_label(f64::NAN), "");
    }

    #[test]
    fn indexed_walk_skips_out_of_bounds_indices() {
        let contents = ["A", "B", "C"];
        let labels = indexed_labels(
            DoubleRange::new(0.0, 5.0),
            1.0,
            |index| contents.get(index).map(|v| (*v).to_owned()),
            EdgeLabelVisibility::None,
            1.0,
        );

        assert_eq!(positions(&labels), vec![0.0, 1.0, 2.0]);
        assert_eq!(labels[2].content, "C");
    }

    #[test]
    fn minor_ticks_subdivide_majors_into_interior_boundaries() {
        let minors = minor_tick_positions(DoubleRange::new(0.0, 20.0), 10.0, 1);
        assert_eq!(minors, vec![5.0, 15.0]);

        let quarters = minor_tick_positions(DoubleRange::new(0.0, 10.0), 10.0, 3);
        assert_eq!(quarters, vec![2.5, 5.0, 7.5]);
    }

    #[test]
    fn minor_ticks_cover_leading_partial_interval() {
        let minors = minor_tick_positions(DoubleRange::new(3.0, 27.0), 10.0, 1);
        assert_eq!(minors, vec![5.0, 15.0, 25.0]);
    }

    #[test]
    fn zero_minor_count_emits_nothing() {
        assert!(minor_tick_positions(DoubleRange::new(0.0, 10.0), 10.0, 0).is_empty());
    }

    #[test]
    fn tick_walks_stop_at_the_emission_ceiling() {
        // Interval vanishingly small relative to the span: the walk stops
        // at the ceiling instead of exhausting memory.
        let labels = numeric_labels(
            DoubleRange::new(0.0, 1e18),
            1e-6,
            EdgeLabelVisibility::None,
            1.0,
        );
        assert_eq!(labels.len(), super::MAX_TICKS_PER_PASS);

        let minors = minor_tick_positions(DoubleRange::new(0.0, 1e12), 1e-3, 1);
        assert!(!minors.is_empty());
        assert!(minors.len() <= super::MAX_TICKS_PER_PASS);
    }

    #[test]
    fn stalled_walk_positions_terminate() {
        // At 1e17 a half-unit step is absorbed by float rounding; the walk
        // must detect the lack of progress and stop.
        let labels = numeric_labels(
            DoubleRange::new(1e17, 2e17),
            0.5,
            EdgeLabelVisibility::None,
            1.0,
        );
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].position, 1e17);
    }
}
