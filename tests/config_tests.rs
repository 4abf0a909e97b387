use gpui_frame_stats::data_types::{CenterOffset, FrameStatConfig, LegendPosition};

#[test]
fn test_defaults() {
    let config = FrameStatConfig::default();
    assert_eq!(config.total_time, 10.0);
    assert_eq!(config.tick_spacing, 1.0);
    assert!(!config.show_percent);
    assert!(config.legend.enabled);
    assert_eq!(config.legend.width, 90.0);

    let view = config.view_state();
    assert_eq!(view.center_offset, CenterOffset::Live);
    assert_eq!(view.total_time, 10.0);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = FrameStatConfig::from_json(
        r#"{ "total_time": 5.0, "show_percent": true, "legend": { "position": "Right" } }"#,
    )
    .unwrap();

    assert_eq!(config.total_time, 5.0);
    assert!(config.show_percent);
    assert_eq!(config.tick_spacing, 1.0);
    assert_eq!(config.legend.position, LegendPosition::Right);
    assert_eq!(config.legend.width, 90.0);
    assert!(config.view_state().show_percent);
}

#[test]
fn test_json_round_trip() {
    let mut config = FrameStatConfig::default();
    config.label_spacing = 18.0;
    config.history_capacity = 300;
    let json = config.to_json().unwrap();
    assert_eq!(FrameStatConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = FrameStatConfig::from_json("{ total_time: ").unwrap_err();
    assert!(format!("{err:#}").contains("frame stat config"));
}
