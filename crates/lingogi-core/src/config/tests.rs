use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.lingogi.data_dir, "~/.lingogi");
    assert_eq!(cfg.lingogi.log_level, "info");
    assert!(cfg.lingogi.log_file.is_none());
    assert_eq!(cfg.storage.backend, StorageBackend::File);
    assert_eq!(cfg.storage.path, "~/.lingogi/data/preferences.json");
    assert_eq!(cfg.i18n.base_language, LocaleCode::En);
    assert!(cfg.i18n.locales_dir.is_none());
    assert_eq!(cfg.diagnostics.startup_delay_ms, 1500);
    assert_eq!(cfg.diagnostics.check_translations, cfg!(debug_assertions));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.storage.backend, StorageBackend::File);
    assert_eq!(cfg.i18n.base_language, LocaleCode::En);
}

#[test]
fn test_partial_sections_from_toml() {
    let toml_str = r#"
        [storage]
        backend = "memory"

        [i18n]
        base_language = "ko"
        locales_dir = "/tmp/locales"

        [diagnostics]
        check_translations = true
        startup_delay_ms = 0
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    assert_eq!(cfg.storage.path, "~/.lingogi/data/preferences.json");
    assert_eq!(cfg.i18n.base_language, LocaleCode::Ko);
    assert_eq!(cfg.i18n.locales_dir.as_deref(), Some("/tmp/locales"));
    assert!(cfg.diagnostics.check_translations);
    assert_eq!(cfg.diagnostics.startup_delay_ms, 0);
    assert_eq!(cfg.lingogi.log_level, "info");
}

#[test]
fn test_unsupported_base_language_is_rejected() {
    let toml_str = r#"
        [i18n]
        base_language = "xx"
    "#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let cfg = load("/nonexistent/__lingogi_config__.toml").unwrap();
    assert_eq!(cfg.storage.backend, StorageBackend::File);
}

#[test]
fn test_load_invalid_file_is_config_error() {
    let tmp = std::env::temp_dir().join("__lingogi_test_invalid_config__.toml");
    std::fs::write(&tmp, "not = valid = toml").unwrap();

    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, LingogiError::Config(_)), "got {err:?}");

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__lingogi_test_config__.toml");
    std::fs::write(&tmp, "[lingogi]\nlog_level = \"debug\"\n").unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.lingogi.log_level, "debug");

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/.lingogi/data");
        assert_eq!(expanded, format!("{}/.lingogi/data", home.to_string_lossy()));
    }
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
}
