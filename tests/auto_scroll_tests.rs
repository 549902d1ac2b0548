use axis_engine::core::zoom::auto_scroll_range;
use axis_engine::core::{
    AutoScrollAnchor, AvailableSize, DateTimeIntervalType, DoubleRange, NumericPaddingMode,
};
use axis_engine::engine::{
    AutoScrollConfig, AxisConfig, AxisKind, AxisRangeEngine, AxisValues, SeriesSource,
};

fn numeric_series(values: &[f64]) -> SeriesSource {
    SeriesSource {
        x_values: AxisValues::Numeric(values.to_vec()),
        visible_x_range: axis_engine::engine::range_from_values(values),
        ..SeriesSource::default()
    }
}

#[test]
fn end_anchored_scroll_pins_the_latest_window() {
    let config = AxisConfig::default()
        .with_numeric_padding(NumericPaddingMode::None)
        .with_auto_scroll(AutoScrollConfig::new(30.0, AutoScrollAnchor::End));
    let mut engine = AxisRangeEngine::new(AxisKind::Numeric, config).expect("engine init");
    engine.set_series(vec![numeric_series(&[0.0, 100.0])]);

    let state = engine.recalculate(AvailableSize::new(500.0, 300.0));
    assert_eq!(state.actual_range, DoubleRange::new(0.0, 100.0));
    assert_eq!(state.visible_range, DoubleRange::new(70.0, 100.0));
    assert!((state.scale.zoom_position - 0.7).abs() <= 1e-12);
    assert!((state.scale.zoom_factor - 0.3).abs() <= 1e-12);
    // A 30-unit window at 8-ish desired intervals re-selects a finer tick.
    assert_eq!(state.visible_interval, 5.0);
    assert!(state.visible_interval < state.actual_interval);
}

#[test]
fn start_anchored_scroll_pins_the_earliest_window() {
    let config = AxisConfig::default()
        .with_numeric_padding(NumericPaddingMode::None)
        .with_auto_scroll(AutoScrollConfig::new(25.0, AutoScrollAnchor::Start));
    let mut engine = AxisRangeEngine::new(AxisKind::Numeric, config).expect("engine init");
    engine.set_series(vec![numeric_series(&[0.0, 100.0])]);

    let state = engine.recalculate(AvailableSize::new(500.0, 300.0));
    assert_eq!(state.visible_range, DoubleRange::new(0.0, 25.0));
    assert_eq!(state.scale.zoom_position, 0.0);
    assert!((state.scale.zoom_factor - 0.25).abs() <= 1e-12);
}

#[test]
fn oversized_delta_shows_the_whole_actual_range() {
    let config = AxisConfig::default()
        .with_numeric_padding(NumericPaddingMode::None)
        .with_auto_scroll(AutoScrollConfig::new(500.0, AutoScrollAnchor::End));
    let mut engine = AxisRangeEngine::new(AxisKind::Numeric, config).expect("engine init");
    engine.set_series(vec![numeric_series(&[0.0, 100.0])]);

    let state = engine.recalculate(AvailableSize::new(500.0, 300.0));
    assert_eq!(state.visible_range, DoubleRange::new(0.0, 100.0));
    assert!(!state.scale.is_zoomed());
}

#[test]
fn calendar_delta_converts_to_fractional_days() {
    let scroll = AutoScrollConfig {
        delta: 12.0,
        anchor: AutoScrollAnchor::End,
        delta_type: DateTimeIntervalType::Hours,
    };
    let config = AxisConfig::default()
        .with_range_overrides(Some(0.0), Some(2.0))
        .with_auto_scroll(scroll);
    let mut engine = AxisRangeEngine::new(AxisKind::DateTime, config).expect("engine init");

    let state = engine.recalculate(AvailableSize::new(300.0, 300.0));
    assert_eq!(state.actual_range, DoubleRange::new(0.0, 2.0));
    assert_eq!(state.visible_range, DoubleRange::new(1.5, 2.0));
    assert!((state.scale.zoom_factor - 0.25).abs() <= 1e-12);
    assert!((state.scale.zoom_position - 0.75).abs() <= 1e-12);
}

#[test]
fn zero_or_negative_delta_leaves_the_range_alone() {
    let actual = DoubleRange::new(10.0, 50.0);
    assert_eq!(
        auto_scroll_range(actual, 0.0, AutoScrollAnchor::End),
        actual
    );
    assert_eq!(
        auto_scroll_range(actual, -4.0, AutoScrollAnchor::Start),
        actual
    );
}
