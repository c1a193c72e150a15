//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;

/// Write `contents` to a per-test file in the temp dir.
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("fossview_{}_{name}.toml", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

fn cleanup(path: &Path) {
    fs::remove_file(path).ok();
}

/// Removes the var on creation and on drop so env tests cannot leak.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== Paths =====

#[test]
fn default_config_path_points_into_fossview_dir() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("fossview") && path_str.ends_with("config.toml"),
        "got: {path_str}"
    );
}

#[test]
fn default_log_path_ends_with_fossview_log() {
    let path = default_log_path();
    assert!(path.ends_with("fossview.log"), "got: {path:?}");
}

// ===== File loading =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    assert_eq!(load_config_file("/nonexistent/path/to/config.toml"), Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = temp_config(
        "valid",
        r#"
page_size = 20
notification_ms = 3500
no_color = true
log_file_path = "/tmp/fv.log"
start_path = "/article/"
"#,
    );

    let config = load_config_file(&path).unwrap().expect("file exists");
    assert_eq!(config.page_size, Some(20));
    assert_eq!(config.notification_ms, Some(3500));
    assert_eq!(config.no_color, Some(true));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/fv.log")));
    assert_eq!(config.start_path.as_deref(), Some("/article/"));

    cleanup(&path);
}

#[test]
fn load_config_file_handles_partial_config() {
    let path = temp_config("partial", "page_size = 5\n# rest omitted\n");

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.page_size, Some(5));
    assert_eq!(config.notification_ms, None);
    assert_eq!(config.start_path, None);

    cleanup(&path);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = temp_config("invalid", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }

    cleanup(&path);
}

#[test]
fn config_file_rejects_unknown_fields() {
    let path = temp_config("unknown", "theme = \"monokai\"\n");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));

    cleanup(&path);
}

#[test]
fn zero_page_size_is_rejected() {
    let path = temp_config("zero", "page_size = 0\n");

    assert_eq!(
        load_config_file(&path),
        Err(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string(),
        })
    );

    cleanup(&path);
}

// ===== Merge =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.notification_ms, 2000);
    assert!(!config.no_color);
    assert_eq!(config.start_path, "/");
    assert_eq!(config.log_file_path, default_log_path());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_only_present_fields() {
    let file = ConfigFile {
        page_size: Some(25),
        start_path: Some("/article/search/".into()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();
    assert_eq!(resolved.page_size, 25);
    assert_eq!(resolved.start_path, "/article/search/");
    assert_eq!(resolved.notification_ms, defaults.notification_ms);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

// ===== Env overrides =====

#[test]
#[serial(fossview_page_size)]
fn apply_env_overrides_sets_page_size() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV);
    env::set_var(PAGE_SIZE_ENV, "7");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.page_size, 7);
}

#[test]
#[serial(fossview_page_size)]
fn apply_env_overrides_ignores_invalid_page_size() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV);

    for raw in ["zero", "0", "-3", ""] {
        env::set_var(PAGE_SIZE_ENV, raw);
        let result = apply_env_overrides(ResolvedConfig::default());
        assert_eq!(result.page_size, 10, "value {raw:?} should be ignored");
    }
}

#[test]
#[serial(fossview_page_size)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(fossview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let explicit = temp_config("explicit", "page_size = 3\n");
    let from_env = temp_config("from_env", "page_size = 4\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.page_size, Some(3));

    cleanup(&explicit);
    cleanup(&from_env);
}

#[test]
#[serial(fossview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let from_env = temp_config("env_only", "notification_ms = 900\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.notification_ms, Some(900));

    cleanup(&from_env);
}

#[test]
#[serial(fossview_config)]
fn load_config_with_precedence_env_pointing_nowhere_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    env::set_var(CONFIG_ENV, "/nonexistent/fossview/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI overrides and full chain =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, false, None), base);
}

#[test]
fn apply_cli_overrides_ignores_zero_page_size() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(0), false, None);
    assert_eq!(result.page_size, 10);
}

#[test]
#[serial(fossview_page_size)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV);
    let file = ConfigFile {
        page_size: Some(20),
        start_path: Some("/article/".into()),
        ..ConfigFile::default()
    };
    env::set_var(PAGE_SIZE_ENV, "30");

    let merged = merge_config(Some(file));
    assert_eq!(merged.page_size, 20);

    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.page_size, 30);

    let final_config = apply_cli_overrides(with_env, Some(40), true, Some("/article/1/".into()));
    assert_eq!(final_config.page_size, 40);
    assert!(final_config.no_color);
    assert_eq!(final_config.start_path, "/article/1/");
}
