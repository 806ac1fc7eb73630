use moments_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_resumes_sessions() {
    let cfg = Config::default();

    assert!(cfg.resume_session);
    assert!(cfg.ui_color_enabled);
    assert_eq!(cfg.theme, Theme::Iconic);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("theme", "plain").expect("theme");
    cfg.set("resume_session", "off").expect("resume");
    cfg.set("style_root", "site/style").expect("style root");

    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().ends_with("config/config.json"));
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.resolve_style_root(), std::path::PathBuf::from("site/style"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg: Config = serde_json::from_str(r#"{"theme": "sparkly"}"#).expect("parse");
    assert_eq!(cfg, Config::default());
}

#[test]
fn set_rejects_unknown_keys_and_bad_flags() {
    let mut cfg = Config::default();
    assert!(matches!(
        cfg.set("currency", "USD"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        cfg.set("resume_session", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    cfg.set("session_dir", "").expect("unset");
    assert!(cfg.session_dir.is_none());
}
