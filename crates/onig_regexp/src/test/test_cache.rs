// Tests for the pattern cache
use crate::*;
use pretty_assertions::assert_eq;

#[test]
fn test_cache_returns_same_instance() {
    let mut cache = PatternCache::new();
    let a = cache.compile("a+b", Options::NONE).unwrap();
    let b = cache.compile("a+b", Options::NONE).unwrap();
    assert!(Regexp::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains("a+b", Options::NONE));
}

#[test]
fn test_cache_keys_on_options() {
    let mut cache = PatternCache::new();
    let a = cache.compile("abc", Options::NONE).unwrap();
    let b = cache.compile("abc", Options::IGNORECASE).unwrap();
    assert!(!Regexp::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);
    assert!(!cache.contains("abc", Options::MULTILINE));
}

#[test]
fn test_cache_failed_compile_not_stored() {
    let mut cache = PatternCache::new();
    assert!(cache.compile("[a-", Options::NONE).is_err());
    assert!(cache.is_empty());
    assert!(!cache.contains("[a-", Options::NONE));
}

#[test]
fn test_cache_compile_value() {
    let mut cache = PatternCache::new();
    let a = cache.compile_value("x", &Value::Bool(true)).unwrap();
    let b = cache.compile("x", Options::IGNORECASE).unwrap();
    assert!(Regexp::ptr_eq(&a, &b));
    assert!(cache.compile_value("x", &Value::Bool(false)).is_err());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_clear() {
    let mut cache = PatternCache::new();
    let a = cache.compile("q", Options::NONE).unwrap();
    cache.clear();
    assert!(cache.is_empty());
    let b = cache.compile("q", Options::NONE).unwrap();
    assert!(!Regexp::ptr_eq(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn test_cache_syntax_option() {
    let mut cache = PatternCache::with_option(EngineOption {
        syntax: SyntaxKind::Perl,
        cache_capacity: 4,
    });
    let re = cache.compile("\\d+", Options::NONE).unwrap();
    assert_eq!(re.syntax(), SyntaxKind::Perl);
    assert_eq!(cache.option().syntax, SyntaxKind::Perl);
}

#[test]
fn test_default_cache() {
    let a = Regexp::compile("default-cache-\\w", Options::NONE).unwrap();
    let b = Regexp::compile("default-cache-\\w", Options::NONE).unwrap();
    assert!(Regexp::ptr_eq(&a, &b));
    assert!(with_default_cache(|cache| cache.contains("default-cache-\\w", Options::NONE)));
}
