use std::collections::HashMap;

use mindbalance_api::config::{ApiConfig, DEFAULT_ADDR, LogFormat};

fn config_from(pairs: &[(&str, &str)]) -> ApiConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_without_environment() {
    let config = config_from(&[]);
    assert_eq!(config.addr, DEFAULT_ADDR);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.lambda);
}

#[test]
fn reads_overrides() {
    let config = config_from(&[
        ("MINDBALANCE_ADDR", "0.0.0.0:8080"),
        ("MINDBALANCE_LOG_FORMAT", "Pretty"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ]);
    assert_eq!(config.addr, "0.0.0.0:8080");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.lambda);
}

#[test]
fn unknown_log_format_is_json() {
    assert_eq!(LogFormat::parse("xml"), LogFormat::Json);
}
