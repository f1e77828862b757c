use super::*;
use crate::services::render::DisplayUnit;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.display_unit, DisplayUnit::Native);
    assert_eq!(config.state_db, PathBuf::from("gymcard.db"));
}

#[test]
fn test_overrides_from_vars() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (ENV_STATE_DB, "/var/lib/gymcard/state.db"),
        (ENV_DISPLAY_UNIT, "KG"),
        (ENV_CARD_PATH, "out/card.svg"),
    ]))
    .unwrap();

    assert_eq!(config.state_db, PathBuf::from("/var/lib/gymcard/state.db"));
    assert_eq!(config.display_unit, DisplayUnit::Kg);
    assert_eq!(config.card_path, PathBuf::from("out/card.svg"));
}

#[test]
fn test_blank_values_keep_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[(ENV_DISPLAY_UNIT, "  ")])).unwrap();
    assert_eq!(config.display_unit, DisplayUnit::Native);
}

#[test]
fn test_invalid_unit_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(ENV_DISPLAY_UNIT, "stone")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUnit("stone".into()));
}

#[test]
fn test_config_json_round_trip() {
    let config = AppConfig {
        display_unit: DisplayUnit::Lbs,
        ..AppConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"displayUnit\":\"lbs\""));
    let back: AppConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
