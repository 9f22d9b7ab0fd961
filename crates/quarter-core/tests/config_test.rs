use std::collections::HashMap;
use std::io::Write;

use quarter_core::config::*;
use quarter_core::errors::ConfigError;
use quarter_core::RoundingMode;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AllocatorConfig::from_toml("").unwrap();
    assert_eq!(config.quarter_count, 4);
    assert_eq!(config.default_ratios, None);
    assert_eq!(config.value_key, "value");
    assert_eq!(config.rounding, RoundingMode::Floor);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
quarter_count = 6
default_ratios = [0.1, 0.2, 0.2, 0.2, 0.2, 0.1]
rounding = "ceiling"
"#;
    let config = AllocatorConfig::from_toml(toml).unwrap();
    assert_eq!(config.quarter_count, 6);
    assert_eq!(config.rounding, RoundingMode::Ceil);
    // Non-overridden fields keep defaults
    assert_eq!(config.value_key, "value");
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_unknown_rounding_mode() {
    let err = AllocatorConfig::from_toml(r#"rounding = "bankers""#).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = AllocatorConfig::with_quarters(3)
        .default_ratios(vec![0.5, 0.25, 0.25])
        .rounding(RoundingMode::Round)
        .value_key("amount");
    let toml_str = config.to_toml().unwrap();
    let roundtripped = AllocatorConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn validate_rejects_ratio_count_mismatch() {
    let config = AllocatorConfig::with_quarters(4).default_ratios(vec![0.1, 0.1, 0.1, 0.1, 0.5]);
    assert_eq!(
        config.validate(),
        Err(ConfigError::RatioCountMismatch {
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn validate_rejects_negative_and_non_finite_ratios() {
    let negative = AllocatorConfig::with_quarters(2).default_ratios(vec![0.5, -0.5]);
    assert_eq!(
        negative.validate(),
        Err(ConfigError::InvalidRatio {
            index: 1,
            value: -0.5
        })
    );

    let infinite = AllocatorConfig::with_quarters(2).default_ratios(vec![f64::INFINITY, 0.5]);
    assert!(matches!(
        infinite.validate(),
        Err(ConfigError::InvalidRatio { index: 0, .. })
    ));
}

#[test]
fn validate_rejects_zero_quarters_and_empty_key() {
    assert_eq!(
        AllocatorConfig::with_quarters(0).validate(),
        Err(ConfigError::ZeroQuarters)
    );
    assert!(matches!(
        AllocatorConfig::default().value_key("  ").validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn resolve_ratios_derives_equal_shares() {
    let ratios = AllocatorConfig::with_quarters(4).resolve_ratios().unwrap();
    assert_eq!(ratios.as_slice(), &[0.25, 0.25, 0.25, 0.25]);
    assert_eq!(ratios.sum(), 1.0);
    assert_eq!(ratios.get(7), 0.0);
}

#[test]
fn resolve_ratios_keeps_explicit_ratios() {
    let ratios = AllocatorConfig::with_quarters(6)
        .default_ratios(vec![0.0, 0.25, 0.25, 0.25, 0.25, 0.0])
        .resolve_ratios()
        .unwrap();
    assert_eq!(ratios.len(), 6);
    assert_eq!(ratios.get(0), 0.0);
    assert_eq!(ratios.get(1), 0.25);
}

#[test]
fn env_overrides_apply_and_skip_garbage() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("QUARTER_COUNT", "6"),
        ("QUARTER_DEFAULT_RATIOS", "0.1, 0.2,0.2,0.2,0.2,0.1"),
        ("QUARTER_ROUNDING", "not-a-mode"),
        ("QUARTER_VALUE_KEY", "amount"),
    ]);
    let mut config = AllocatorConfig::default();
    config.apply_env_overrides_from(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.quarter_count, 6);
    assert_eq!(config.default_ratios, Some(vec![0.1, 0.2, 0.2, 0.2, 0.2, 0.1]));
    assert_eq!(config.value_key, "amount");
    // Unparseable value leaves the previous setting in place.
    assert_eq!(config.rounding, RoundingMode::Floor);
    assert!(config.validate().is_ok());
}

#[test]
fn explicit_overrides_win() {
    let mut config = AllocatorConfig::default();
    config.apply_env_overrides_from(|key| (key == "QUARTER_ROUNDING").then(|| "ceil".to_string()));
    config.apply_overrides(&ConfigOverrides {
        rounding: Some(RoundingMode::None),
        ..Default::default()
    });
    assert_eq!(config.rounding, RoundingMode::None);
}

#[test]
fn from_file_reads_toml_and_reports_missing_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "quarter_count = 12\nrounding = \"round\"").unwrap();

    let config = AllocatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.quarter_count, 12);
    assert_eq!(config.rounding, RoundingMode::Round);

    let missing = std::path::Path::new("/definitely/not/here/quarter.toml");
    assert!(matches!(
        AllocatorConfig::from_file(missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn load_validates_the_resolved_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "quarter_count = 3\ndefault_ratios = [0.5, 0.5]").unwrap();

    let fixed = ConfigOverrides {
        default_ratios: Some(vec![0.5, 0.25, 0.25]),
        ..Default::default()
    };
    let config = AllocatorConfig::load(Some(file.path()), Some(&fixed)).unwrap();
    assert_eq!(config.default_ratios, Some(vec![0.5, 0.25, 0.25]));

    let err = AllocatorConfig::load(Some(file.path()), None);
    assert!(matches!(err, Err(ConfigError::RatioCountMismatch { .. })));
}
