use super::*;

#[test]
fn test_registry_new_with_valid_url() {
    let registry = Registry::new("http://localhost:5000");
    assert!(registry.is_ok());
}

#[test]
fn test_registry_new_with_https_url() {
    let registry = Registry::new("https://registry.example.com").unwrap();
    assert_eq!(registry.base_url(), "https://registry.example.com");
}

#[test]
fn test_registry_normalizes_url_without_scheme() {
    let registry = Registry::new("localhost:5000").unwrap();
    assert_eq!(registry.base_url(), "http://localhost:5000");
}

#[test]
fn test_registry_removes_trailing_slashes() {
    let registry = Registry::new("http://localhost:5000///").unwrap();
    assert_eq!(registry.base_url(), "http://localhost:5000");
}

#[test]
fn test_registry_trims_whitespace() {
    let registry = Registry::new("  gcr.io  ").unwrap();
    assert_eq!(registry.base_url(), "http://gcr.io");
}

#[test]
fn test_registry_new_with_empty_url_fails() {
    let result = Registry::new("");
    assert!(matches!(
        result,
        Err(TagscopeError::RequestConstruction { .. })
    ));
}

#[test]
fn test_registry_new_with_whitespace_url_fails() {
    assert!(Registry::new("   ").is_err());
}

#[test]
fn test_registry_new_with_malformed_url_fails() {
    for url in ["http://", "http://exa mple.com", "https://[::1"] {
        let result = Registry::new(url);
        assert!(
            matches!(result, Err(TagscopeError::RequestConstruction { .. })),
            "{} should be rejected",
            url
        );
    }
}

#[test]
fn test_tags_list_url_simple_repository() {
    let registry = Registry::new("http://localhost:5000").unwrap();
    let url = registry.tags_list_url("alpine").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/v2/alpine/tags/list");
}

#[test]
fn test_tags_list_url_nested_repository() {
    let registry = Registry::new("https://gcr.io").unwrap();
    let url = registry.tags_list_url("library/alpine").unwrap();
    assert_eq!(url.as_str(), "https://gcr.io/v2/library/alpine/tags/list");
}

#[test]
fn test_tags_list_url_keeps_base_path() {
    let registry = Registry::new("https://mirror.example.com/proxy/").unwrap();
    let url = registry.tags_list_url("team/app").unwrap();
    assert_eq!(
        url.as_str(),
        "https://mirror.example.com/proxy/v2/team/app/tags/list"
    );
}

#[test]
fn test_tags_list_url_strips_surrounding_slashes() {
    let registry = Registry::new("http://localhost:5000").unwrap();
    let url = registry.tags_list_url("/library/alpine/").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/v2/library/alpine/tags/list");
}

#[test]
fn test_tags_list_url_empty_repository_fails() {
    let registry = Registry::new("http://localhost:5000").unwrap();
    for repository in ["", "  ", "/", "//"] {
        let result = registry.tags_list_url(repository);
        assert!(
            matches!(result, Err(TagscopeError::RequestConstruction { .. })),
            "'{}' should be rejected",
            repository
        );
    }
}

#[test]
fn test_tags_list_url_rejects_query_and_fragment() {
    let registry = Registry::new("http://localhost:5000").unwrap();
    assert!(registry.tags_list_url("alpine?n=1").is_err());
    assert!(registry.tags_list_url("alpine#x").is_err());
}
