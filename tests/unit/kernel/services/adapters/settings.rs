use super::*;
use crate::kernel::services::ports::default_tools;
use tempfile::tempdir;

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".sysdc").join("setting.json");

    ensure_settings_file_at(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded, Settings::default());

    std::fs::write(&path, r#"{"workspace":{"base_url":"http://example.test"}}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let kept = load_settings_from(&path).unwrap();
    assert_eq!(kept.workspace.base_url, "http://example.test");
}

#[test]
fn missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, r#"{"layout":{"margin_x":80.0}}"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.layout.margin_x, 80.0);
    assert_eq!(settings.layout.margin_y, 200.0);
    assert_eq!(settings.notifications.auto_hide_ms, 6000);
    assert_eq!(settings.tools, default_tools());
}

#[test]
fn broken_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse(_))
    ));
    assert!(matches!(
        load_settings_from(&dir.path().join("missing.json")),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn settings_live_under_sysdc_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".sysdc/setting.json"));
    }
    if let Some(dir) = get_log_dir() {
        assert!(dir.ends_with(".sysdc/logs"));
    }
}
