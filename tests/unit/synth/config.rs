use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = GradientConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, GradientConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let cfg = GradientConfig::from_reader(
        r##"{"wave_amplitude": 0, "dark_color": "#000000", "reveal": {"kind": "immediate"}}"##
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.wave_amplitude, 0.0);
    assert_eq!(cfg.dark_color, Rgb8::new(0, 0, 0));
    assert_eq!(cfg.reveal, Reveal::Immediate);
    assert_eq!(cfg.left_zone, 0.25);
}

#[test]
fn fade_in_duration_defaults() {
    let cfg =
        GradientConfig::from_reader(r#"{"reveal": {"kind": "fade_in"}}"#.as_bytes()).unwrap();
    assert_eq!(cfg.reveal, Reveal::FadeIn { duration_ms: 600 });
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GradientConfig::from_reader(r#"{"direction": "diagonal"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, WavegradError::Serde(_)));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = GradientConfig {
        vertical_darken: 0.3,
        reveal: Reveal::Immediate,
        ..GradientConfig::default()
    };
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(GradientConfig::from_reader(json.as_bytes()).unwrap(), cfg);
}

#[test]
fn validate_rejects_non_finite() {
    let cfg = GradientConfig {
        wave_frequency: f64::NAN,
        ..GradientConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("wave_frequency"));

    let cfg = GradientConfig {
        vertical_darken: f64::INFINITY,
        ..GradientConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_tolerates_out_of_range_fractions() {
    let cfg = GradientConfig {
        left_zone: 1.5,
        dark_zone: 0.8,
        vertical_darken: 2.0,
        ..GradientConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = GradientConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, WavegradError::Validation(_)));
}
