use std::fs;

use payouts_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_matches_dashboard_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_label, "STX");
    assert_eq!(cfg.wallet_connect_delay_ms, 1500);
    assert!(cfg.seed_sample_data);
    assert_eq!(cfg.recent_activity_limit, 5);
    assert_eq!(cfg.top_teacher_limit, 3);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.wallet_connect_delay_ms = 10;
    cfg.seed_sample_data = false;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "currency_label": "TOK" }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.currency_label, "TOK");
    assert_eq!(loaded.top_teacher_limit, 3);
}

#[test]
fn malformed_file_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "not json").expect("write");

    let err = ConfigManager::new(path.clone()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
    assert_eq!(err.path(), &path);
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn unreadable_path_names_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::create_dir(&path).expect("directory in place of the file");

    let err = ConfigManager::new(path.clone()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Access { .. }));
    assert_eq!(err.path(), &path);
}
