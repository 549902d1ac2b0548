use axis_engine::core::{
    AvailableSize, DateTimeIntervalType, DoubleRange, NumericPaddingMode,
};
use axis_engine::engine::{
    AxisConfig, AxisKind, AxisRangeEngine, AxisValues, EdgeLabelVisibility, SeriesSource,
};

#[test]
fn axis_config_json_roundtrip() {
    let config = AxisConfig::default()
        .with_interval(2.5)
        .with_range_overrides(Some(-10.0), Some(40.0))
        .with_numeric_padding(NumericPaddingMode::Round)
        .with_interval_type(DateTimeIntervalType::Months)
        .with_minor_ticks(3)
        .with_zoom(0.5, 0.25)
        .with_edge_labels(EdgeLabelVisibility::AlwaysVisible)
        .with_label_format("%Y-%m-%d");

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = AxisConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn axis_config_json_rejects_invalid_values() {
    let config = AxisConfig::default().with_interval(2.0);
    let mut json = config.to_json_pretty().expect("serialize");
    json = json.replace("\"interval_override\": 2.0", "\"interval_override\": -1.0");

    assert!(AxisConfig::from_json_str(&json).is_err());
}

#[test]
fn state_snapshot_exposes_ranges_labels_and_scale() {
    let config = AxisConfig::default()
        .with_numeric_padding(NumericPaddingMode::None)
        .with_edge_labels(EdgeLabelVisibility::None);
    let mut engine = AxisRangeEngine::new(AxisKind::Numeric, config).expect("engine init");
    engine.set_series(vec![SeriesSource {
        x_values: AxisValues::Numeric(vec![0.0, 50.0]),
        visible_x_range: DoubleRange::new(0.0, 50.0),
        ..SeriesSource::default()
    }]);
    engine.recalculate(AvailableSize::new(500.0, 300.0));

    let json = engine
        .state()
        .to_json_pretty()
        .expect("state should serialize");
    let decoded: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(decoded["actual_range"]["start"], 0.0);
    assert_eq!(decoded["actual_range"]["end"], 50.0);
    assert_eq!(decoded["actual_interval"], 10.0);
    assert_eq!(decoded["scale"]["zoom_factor"], 1.0);

    let labels = decoded["visible_labels"]
        .as_array()
        .expect("labels array");
    assert!(!labels.is_empty());
    assert_eq!(labels[0]["content"], "0");
    assert!(labels[0]["visible"].as_bool().expect("visible flag"));
}

#[test]
fn state_snapshot_is_stable_across_identical_passes() {
    let mut engine = AxisRangeEngine::new(AxisKind::Numeric, AxisConfig::default())
        .expect("engine init");
    engine.set_series(vec![SeriesSource {
        x_values: AxisValues::Numeric(vec![3.0, 97.0]),
        visible_x_range: DoubleRange::new(3.0, 97.0),
        ..SeriesSource::default()
    }]);

    let first = engine
        .recalculate(AvailableSize::new(640.0, 480.0))
        .to_json_pretty()
        .expect("first snapshot");
    let second = engine
        .recalculate(AvailableSize::new(640.0, 480.0))
        .to_json_pretty()
        .expect("second snapshot");

    assert_eq!(first, second);
}
