use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    assert_eq!(cfg.output_path, PathBuf::from("google_ads_feed.csv"));
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn build_app_config_feed_url_override() {
    let mut map = HashMap::new();
    map.insert("CROPINK_FEED_URL", "https://feeds.example.com/products.xml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, "https://feeds.example.com/products.xml");
    assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
}

#[test]
fn build_app_config_output_path_override() {
    let mut map = HashMap::new();
    map.insert("OUTPUT_CSV_PATH", "out/ads.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    assert_eq!(cfg.output_path, PathBuf::from("out/ads.csv"));
}

#[test]
fn build_app_config_fails_on_blank_feed_url() {
    let mut map = HashMap::new();
    map.insert("CROPINK_FEED_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CROPINK_FEED_URL"),
        "expected InvalidEnvVar(CROPINK_FEED_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_empty_output_path() {
    let mut map = HashMap::new();
    map.insert("OUTPUT_CSV_PATH", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OUTPUT_CSV_PATH"),
        "expected InvalidEnvVar(OUTPUT_CSV_PATH), got: {result:?}"
    );
}

#[test]
fn with_overrides_replaces_only_supplied_values() {
    let cfg = AppConfig::default().with_overrides(None, Some(PathBuf::from("custom.csv")));
    assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    assert_eq!(cfg.output_path, PathBuf::from("custom.csv"));

    let cfg = cfg.with_overrides(Some("feed.xml".to_string()), None);
    assert_eq!(cfg.feed_url, "feed.xml");
    assert_eq!(cfg.output_path, PathBuf::from("custom.csv"));
}

#[test]
fn validate_app_config_rejects_blank_override() {
    let cfg = AppConfig::default().with_overrides(Some(String::new()), None);
    let err = validate_app_config(&cfg).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CROPINK_FEED_URL"));
}
