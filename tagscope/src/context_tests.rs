use super::*;
use std::io::Write;

#[test]
fn test_from_config_without_overrides_keeps_config() {
    let ctx = AppContext::from_config(Config::default(), Overrides::default());
    assert_eq!(ctx.config, Config::default());
}

#[test]
fn test_from_config_applies_overrides() {
    let overrides = Overrides {
        registry: Some("https://gcr.io".to_string()),
        timeout: Some(3),
        insecure: true,
        color: Some(ColorChoice::Never),
    };
    let ctx = AppContext::from_config(Config::default(), overrides);

    assert_eq!(ctx.config.registry.url, "https://gcr.io");
    assert_eq!(ctx.config.network.timeout, 3);
    assert!(ctx.config.registry.insecure);
    assert_eq!(ctx.config.output.color, ColorChoice::Never);
}

#[test]
fn test_insecure_flag_absent_keeps_config_value() {
    let mut config = Config::default();
    config.registry.insecure = true;

    let ctx = AppContext::from_config(config, Overrides::default());
    assert!(ctx.config.registry.insecure);
}

#[test]
fn test_output_format_flag_wins_over_config() {
    let mut config = Config::default();
    config.output.format = libtagscope::config::OutputFormat::Yaml;
    let ctx = AppContext::from_config(config, Overrides::default());

    assert_eq!(ctx.output_format(Some(OutputFormat::Json)), OutputFormat::Json);
    assert_eq!(ctx.output_format(None), OutputFormat::Yaml);
}

#[test]
fn test_build_with_explicit_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "registry:\n  url: https://mirror.example.com\nnetwork:\n  timeout: 9").unwrap();

    let overrides = Overrides {
        timeout: Some(4),
        ..Overrides::default()
    };
    let ctx = AppContext::build(Some(file.path()), overrides).unwrap();

    assert_eq!(ctx.config.registry.url, "https://mirror.example.com");
    assert_eq!(ctx.config.network.timeout, 4);
}

#[test]
fn test_build_with_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppContext::build(Some(dir.path().join("missing.yaml").as_path()), Overrides::default());
    assert!(result.is_err());
}

#[test]
fn test_resolver_uses_configured_registry() {
    let overrides = Overrides {
        registry: Some("registry.example.com/".to_string()),
        ..Overrides::default()
    };
    let ctx = AppContext::from_config(Config::default(), overrides);

    let resolver = ctx.resolver().unwrap();
    assert_eq!(resolver.registry().base_url(), "http://registry.example.com");
}

#[test]
fn test_resolver_with_bad_registry_fails() {
    let overrides = Overrides {
        registry: Some("   ".to_string()),
        ..Overrides::default()
    };
    let ctx = AppContext::from_config(Config::default(), overrides);

    assert!(ctx.resolver().is_err());
}

#[test]
fn test_default_config_path_ends_with_tagscope_yaml() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("tagscope/config.yaml"));
    }
}
