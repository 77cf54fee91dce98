use super::*;
use std::io::Write;

fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.registry.url, "http://localhost:5000");
    assert!(!config.registry.insecure);
    assert_eq!(config.network.timeout, 30);
    assert_eq!(config.network.max_idle_per_host, 10);
    assert_eq!(config.output.format, OutputFormat::Pretty);
    assert_eq!(config.output.color, ColorChoice::Auto);
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    // Should be equivalent to default
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
registry:
  url: https://gcr.io
network:
  timeout: 60
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.registry.url, "https://gcr.io");
    assert_eq!(config.network.timeout, 60);

    // Check that other values are still default
    assert!(!config.registry.insecure);
    assert_eq!(config.network.max_idle_per_host, 10);
    assert_eq!(config.output.format, OutputFormat::Pretty);
}

#[test]
fn test_from_str_full_yaml() {
    let yaml = r#"
registry:
  url: "https://registry.internal:8443"
  insecure: true
network:
  timeout: 5
  max_idle_per_host: 2
output:
  format: yaml
  color: never
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.registry.url, "https://registry.internal:8443");
    assert!(config.registry.insecure);
    assert_eq!(config.network.timeout, 5);
    assert_eq!(config.network.max_idle_per_host, 2);
    assert_eq!(config.output.format, OutputFormat::Yaml);
    assert_eq!(config.output.color, ColorChoice::Never);
}

#[test]
fn test_from_str_invalid_yaml() {
    let result = Config::from_yaml_str("output: { format: invalid }");
    assert!(matches!(result, Err(TagscopeError::Config { .. })));
}

#[test]
fn test_from_str_unknown_field() {
    // config-rs should ignore unknown fields
    let result = Config::from_yaml_str("unknown_field: true");
    assert!(result.is_ok());
}

#[test]
fn test_client_config_from_config() {
    let yaml = r#"
registry:
  insecure: true
network:
  timeout: 12
  max_idle_per_host: 3
"#;
    let client_config = Config::from_yaml_str(yaml).unwrap().client_config();

    assert_eq!(client_config.timeout_seconds, 12);
    assert_eq!(client_config.max_idle_per_host, 3);
    assert!(client_config.insecure);
}

#[test]
fn test_load_without_file_or_env_is_default() {
    let config = Config::load_with_env(None, env(&[])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "registry:\n  url: https://gcr.io\nnetwork:\n  timeout: 45").unwrap();

    let config = Config::load_with_env(Some(file.path()), env(&[])).unwrap();

    assert_eq!(config.registry.url, "https://gcr.io");
    assert_eq!(config.network.timeout, 45);
}

#[test]
fn test_load_missing_file_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    let result = Config::load_with_env(Some(&missing), env(&[]));

    match result {
        Err(TagscopeError::Config { path, .. }) => {
            assert_eq!(path, Some(missing.display().to_string()));
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_file_reports_path() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "network:\n  timeout: soon").unwrap();

    let result = Config::load_with_env(Some(file.path()), env(&[]));

    match result {
        Err(TagscopeError::Config { path, source, .. }) => {
            assert_eq!(path, Some(file.path().display().to_string()));
            assert!(source.is_some());
        }
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_env_overrides_defaults() {
    let config = Config::load_with_env(
        None,
        env(&[
            ("TAGSCOPE_REGISTRY__URL", "https://mirror.example.com"),
            ("TAGSCOPE_NETWORK__TIMEOUT", "90"),
            ("TAGSCOPE_OUTPUT__FORMAT", "json"),
        ]),
    )
    .unwrap();

    assert_eq!(config.registry.url, "https://mirror.example.com");
    assert_eq!(config.network.timeout, 90);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_env_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "network:\n  timeout: 45\n  max_idle_per_host: 4").unwrap();

    let config = Config::load_with_env(
        Some(file.path()),
        env(&[("TAGSCOPE_NETWORK__TIMEOUT", "10")]),
    )
    .unwrap();

    assert_eq!(config.network.timeout, 10);
    assert_eq!(config.network.max_idle_per_host, 4);
}

#[test]
fn test_env_without_prefix_is_ignored() {
    let config =
        Config::load_with_env(None, env(&[("NETWORK__TIMEOUT", "99"), ("OTHER", "x")])).unwrap();
    assert_eq!(config.network.timeout, 30);
}
