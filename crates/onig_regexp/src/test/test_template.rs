// Tests for replacement template escapes
use crate::*;
use pretty_assertions::assert_eq;

fn sub(subject: &str, pattern: &str, template: &str) -> OnigResult<String> {
    let re = Regexp::new(pattern, Options::NONE).unwrap();
    text_ops::sub(subject, Pattern::Regexp(&re), Replacement::Template(template))
}

#[test]
fn test_template_positional() {
    assert_eq!(sub("john smith", "(\\w+) (\\w+)", "\\2, \\1").unwrap(), "smith, john");
    assert_eq!(sub("abc", "b", "[\\0]").unwrap(), "a[b]c");
    assert_eq!(sub("abc", "b", "[\\&]").unwrap(), "a[b]c");
}

#[test]
fn test_template_pre_post() {
    assert_eq!(sub("abc", "b", "<\\`>").unwrap(), "a<a>c");
    assert_eq!(sub("abc", "b", "<\\'>").unwrap(), "a<c>c");
}

#[test]
fn test_template_named() {
    assert_eq!(
        sub("key=value", "(?<k>\\w+)=(?<v>\\w+)", "\\k<v>:\\k<k>").unwrap(),
        "value:key"
    );

    let err = sub("key=value", "(?<k>\\w+)=", "\\k<nope>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_template_absent_group_is_empty() {
    assert_eq!(sub("ac", "a(b)?c", "[\\1]").unwrap(), "[]");
}

#[test]
fn test_template_group_past_end() {
    let err = sub("abc", "(b)", "\\2").unwrap_err();
    assert_eq!(err, OnigError::InvalidGroupReference(2));
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_template_literal_escapes() {
    assert_eq!(sub("abc", "b", "\\\\").unwrap(), "a\\c");
    // Unknown escapes and a trailing backslash are kept as written
    assert_eq!(sub("abc", "b", "\\n\\q").unwrap(), "a\\n\\qc");
    assert_eq!(sub("abc", "b", "x\\").unwrap(), "ax\\c");
    assert_eq!(sub("abc", "b", "\\k<open").unwrap(), "a\\k<openc");
}

#[test]
fn test_template_plain() {
    assert_eq!(sub("abc", "b", "BB").unwrap(), "aBBc");
    assert_eq!(sub("abc", "b", "").unwrap(), "ac");
}

#[test]
fn test_template_literal_pattern() {
    let out = text_ops::gsub("a.b.c", Pattern::Literal("."), Replacement::Template("<\\0>"));
    assert_eq!(out.unwrap(), "a<.>b<.>c");

    let err = text_ops::sub("a.b", Pattern::Literal("."), Replacement::Template("\\1"));
    assert_eq!(err.unwrap_err(), OnigError::InvalidGroupReference(1));

    let err = text_ops::sub("a.b", Pattern::Literal("."), Replacement::Template("\\k<x>"));
    assert!(err.is_err());
}
