use super::*;

#[test]
fn test_default_directives_quiet() {
    assert_eq!(
        default_directives(0),
        "warn,tagscope=warn,libtagscope=warn"
    );
}

#[test]
fn test_default_directives_levels() {
    assert!(default_directives(1).contains("libtagscope=info"));
    assert!(default_directives(2).contains("libtagscope=debug"));
    assert!(default_directives(3).contains("libtagscope=trace"));
    assert!(default_directives(9).contains("tagscope=trace"));
}

#[test]
fn test_default_directives_parse() {
    for verbosity in 0..4 {
        assert!(EnvFilter::try_new(default_directives(verbosity)).is_ok());
    }
}

#[test]
fn test_init_twice_does_not_panic() {
    init(0);
    init(2);
}
