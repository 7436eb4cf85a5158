use jayinsights::core::config::{normalize_fan_key, Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.fan_labels.is_empty());
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("missing.yaml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_fan_labels() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        "fan_labels:\n  Fan1: \"Front intake\"\n  Fan2: Rear exhaust\n  Fan3: \"\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path);

    assert_eq!(config.fan_labels.len(), 3);
    assert_eq!(config.fan_label("Fan1"), Some("Front intake"));
    assert_eq!(config.fan_label("Fan2"), Some("Rear exhaust"));
    assert_eq!(config.fan_label("Fan3"), None);
}

#[test]
fn test_config_labels_apply_to_normalized_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "fan_labels:\n  Fan4: Pump\n").unwrap();

    let config = Config::load_from(&path);
    let key = normalize_fan_key("it8686 Fan4");

    assert_eq!(key, "Fan4");
    assert_eq!(config.fan_label(&key), Some("Pump"));
}

#[test]
fn test_config_invalid_yaml_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "fan_labels: {Fan1: [unclosed\n").unwrap();

    assert!(Config::try_load_from(&path).is_err());
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_path_layout() {
    // Whatever home is resolved, the file lives in the same place under it
    if let Some(path) = Config::get_config_path() {
        assert!(path.ends_with(".config/jayinsights/config.yaml"));
    }
}
