// Tests for Regexp construction and matching
use crate::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::rc::Rc;

#[test]
fn test_regexp_compile() {
    let re = Regexp::new("ab+c", Options::NONE).unwrap();
    assert_eq!(re.source(), "ab+c");
    assert_eq!(re.options(), Options::NONE);
    assert_eq!(re.syntax(), SyntaxKind::Ruby);
    assert!(!re.casefold());
}

#[test]
fn test_regexp_invalid_pattern() {
    let err = Regexp::new("(abc", Options::NONE).unwrap_err();
    assert!(matches!(err, OnigError::Compile { .. }));
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(err.to_string().starts_with("'(abc' is an invalid regular expression because"));
}

#[test]
fn test_regexp_multiline_dot() {
    let re = Regexp::new(".*", Regexp::MULTILINE).unwrap();
    let m = re.match_str("abc\ndef").unwrap().unwrap();
    assert_eq!(m.as_str(), "abc\ndef");

    let re = Regexp::new(".*", Options::NONE).unwrap();
    let m = re.match_str("abc\ndef").unwrap().unwrap();
    assert_eq!(m.as_str(), "abc");
}

#[test]
fn test_regexp_anchor() {
    let re = Regexp::new("^a.", Options::NONE).unwrap();
    assert_eq!(re.match_str("abc").unwrap().unwrap().as_str(), "ab");
    assert!(re.match_str("bac").unwrap().is_none());
}

#[test]
fn test_regexp_ignorecase() {
    let re = Regexp::new("abc", true).unwrap();
    assert!(re.casefold());
    assert!(re.is_match("xABCx"));

    let re = Regexp::new("abc", Options::NONE).unwrap();
    assert!(!re.is_match("ABC"));

    let re = Regexp::new("abc", "i").unwrap();
    assert!(re.casefold());
    assert!(re.is_match("AbC"));
}

#[test]
fn test_regexp_extended() {
    let re = Regexp::new("a b  c # comment", Regexp::EXTENDED).unwrap();
    assert!(re.is_match("abc"));
    assert!(!re.is_match("a b c"));
}

#[test]
fn test_regexp_from_value() {
    let re = Regexp::from_value("a", &Value::Nil).unwrap();
    assert_eq!(re.options(), Options::NONE);

    let re = Regexp::from_value("a", &Value::Bool(true)).unwrap();
    assert!(re.casefold());

    let re = Regexp::from_value("a", &Value::Integer(5)).unwrap();
    assert_eq!(re.options(), Options::IGNORECASE | Options::MULTILINE);

    let re = Regexp::from_value("a", &Value::from("mx")).unwrap();
    assert_eq!(re.options(), Options::MULTILINE | Options::EXTENDED);

    let err = Regexp::from_value("a", &Value::Bool(false)).unwrap_err();
    assert_eq!(err, OnigError::UnknownFlag("false".to_string()));
    assert_eq!(err.kind(), ErrorKind::Argument);

    assert!(Regexp::from_value("a", &Value::Float(1.5)).is_err());
}

#[test]
fn test_regexp_match_at_position() {
    let re = Regexp::new("o", Options::NONE).unwrap();
    let subject: Rc<str> = Rc::from("foo boo");

    let m = re.match_at(&subject, 3).unwrap().unwrap();
    assert_eq!(m.begin(0).unwrap(), Some(5));
    // Anchors and pre-match still see the whole subject
    assert_eq!(m.pre_match(), "foo b");

    assert!(re.match_at(&subject, 7).unwrap().is_none());
    assert!(re.match_at(&subject, 100).unwrap().is_none());
    assert!(re.match_at(&subject, -1).unwrap().is_none());
}

#[test]
fn test_regexp_match_at_char_boundary() {
    let re = Regexp::new("l", Options::NONE).unwrap();
    let subject: Rc<str> = Rc::from("héllo");
    // Offset 2 is inside 'é'
    let m = re.match_at(&subject, 2).unwrap().unwrap();
    assert_eq!(m.begin(0).unwrap(), Some(3));
}

#[test]
fn test_regexp_empty_subject_never_matches() {
    let re = Regexp::new(".*", Options::NONE).unwrap();
    assert!(re.match_str("").unwrap().is_none());
    assert!(!re.is_match(""));
    assert_eq!(re.match_index("").unwrap(), None);
}

#[test]
fn test_regexp_match_index() {
    let re = Regexp::new("b+", Options::NONE).unwrap();
    assert_eq!(re.match_index("aabbb").unwrap(), Some(2));
    assert_eq!(re.match_index("aaa").unwrap(), None);
}

#[test]
fn test_regexp_last_match() {
    Regexp::clear_last_match();
    assert!(Regexp::last_match().is_none());

    let re = Regexp::new("(\\d+)", Options::NONE).unwrap();
    re.match_str("abc 42").unwrap();
    let last = Regexp::last_match().unwrap();
    assert_eq!(last.get(1).unwrap(), Some("42"));

    // A failed match keeps the previous one
    re.match_str("none").unwrap();
    assert_eq!(Regexp::last_match().unwrap().as_str(), "42");

    Regexp::clear_last_match();
    assert!(Regexp::last_match().is_none());
}

#[test]
fn test_regexp_groups_and_names() {
    let re = Regexp::new("(?<year>\\d+)-(?<month>\\d+)", Options::NONE).unwrap();
    assert_eq!(re.captures_len(), 2);
    assert_eq!(re.names(), &["year", "month"]);

    let re = Regexp::new("(a)(b)?", Options::NONE).unwrap();
    assert_eq!(re.captures_len(), 2);
    assert!(re.names().is_empty());
}

#[test]
fn test_regexp_equality() {
    let a = Regexp::new("abc", Options::NONE).unwrap();
    let b = Regexp::new("abc", Options::NONE).unwrap();
    let c = Regexp::new("abc", Options::IGNORECASE).unwrap();
    let d = Regexp::new("abd", Options::NONE).unwrap();

    assert_eq!(a, b);
    assert!(!Regexp::ptr_eq(&a, &b));
    assert_ne!(a, c);
    assert_ne!(a, d);

    let a2 = a.clone();
    assert!(Regexp::ptr_eq(&a, &a2));

    let set: HashSet<Regexp> = [a, b, c, d].into_iter().collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_regexp_display() {
    let re = Regexp::new("a.c", Options::IGNORECASE | Options::MULTILINE).unwrap();
    assert_eq!(re.to_string(), "/a.c/mi");

    let re = Regexp::new("x", Options::NONE).unwrap();
    assert_eq!(re.to_string(), "/x/");
}

#[test]
fn test_regexp_syntax_option() {
    let option = EngineOption {
        syntax: SyntaxKind::Asis,
        ..Default::default()
    };
    let re = Regexp::with_option("a.c", Options::NONE, &option).unwrap();
    assert_eq!(re.syntax(), SyntaxKind::Asis);
    assert!(re.is_match("xa.cx"));
    assert!(!re.is_match("abc"));
}

#[test]
fn test_regexp_version() {
    assert!(!Regexp::version().is_empty());
}
