use std::collections::HashMap;
use std::path::PathBuf;

use crate::Config;

#[test]
fn test_empty_profile_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.gemini.model, "gemini-3-flash-preview");
    assert_eq!(config.gemini.max_attempts, 3);
    assert_eq!(config.gemini.backoff_ms, 1000);
    assert_eq!(config.storage.history_limit, 10);
    assert_eq!(config.offline.cache_version, "yousif-ai-v2");
    assert_eq!(config.offline.assets.len(), 5);
    assert_eq!(config.ui.focus_delay_ms, 100);
    assert!(!config.start_offline);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: Config =
        serde_json::from_str(r#"{ "gemini": { "model": "gemini-pro" }, "ui": { "color": false } }"#)
            .unwrap();

    assert_eq!(config.gemini.model, "gemini-pro");
    assert_eq!(config.gemini.max_attempts, 3);
    assert!(!config.ui.color);
    assert_eq!(config.ui.focus_delay_ms, 100);
}

#[test]
fn test_api_key_is_never_serialized() {
    let mut config = Config::default();
    config.gemini.api_key = "secret".to_string();

    let json = serde_json::to_string(&config).unwrap();

    assert!(!json.contains("secret"));
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn test_env_overrides_every_profile_value() {
    let mut profile = Config::default();
    profile.gemini.max_attempts = 4;
    profile.storage.history_limit = 20;

    let config = profile.apply_env_from(&lookup(&[
        ("API_KEY", "from-env"),
        ("GEMINI_MODEL", "gemini-pro"),
        ("GEMINI_API_URL", "http://localhost:9000/v1"),
        ("FETCH_MAX_ATTEMPTS", "5"),
        ("FETCH_BACKOFF_MS", "50"),
        ("YOUSIF_DATA_DIR", "/tmp/yousif"),
        ("HISTORY_LIMIT", "3"),
        ("ASSET_BASE_URL", "http://assets.local"),
        ("ASSET_CACHE_VERSION", "yousif-ai-v3"),
        ("FOCUS_DELAY_MS", "7"),
        ("YOUSIF_START_OFFLINE", "true"),
        ("NO_COLOR", ""),
    ]));

    assert_eq!(config.gemini.api_key, "from-env");
    assert_eq!(config.gemini.model, "gemini-pro");
    assert_eq!(config.gemini.api_url, "http://localhost:9000/v1");
    assert_eq!(config.gemini.max_attempts, 5);
    assert_eq!(config.gemini.backoff_ms, 50);
    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/yousif")));
    assert_eq!(config.storage.history_limit, 3);
    assert_eq!(config.offline.base_url, "http://assets.local");
    assert_eq!(config.offline.cache_version, "yousif-ai-v3");
    assert_eq!(config.ui.focus_delay_ms, 7);
    assert!(config.start_offline);
    assert!(!config.ui.color);
}

#[test]
fn test_unset_or_invalid_env_keeps_profile_values() {
    let mut profile = Config::default();
    profile.gemini.backoff_ms = 250;
    profile.storage.history_limit = 20;
    profile.ui.color = false;

    let config = profile.apply_env_from(&lookup(&[
        ("FETCH_BACKOFF_MS", "soon"),
        ("HISTORY_LIMIT", "0"),
        ("GEMINI_API_KEY", "  "),
    ]));

    assert_eq!(config.gemini.backoff_ms, 250);
    assert_eq!(config.storage.history_limit, 20);
    assert!(config.gemini.api_key.is_empty());
    assert!(!config.ui.color);
}
