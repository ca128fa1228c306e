// String extension methods
//
// The regexp flavours of the host string methods, as an extension trait on
// `str`. An embedding layer maps these onto its own string type instead of
// redefining the built-in methods.

use log::*;

use crate::error::OnigResult;
use crate::regexp::{Options, Regexp};
use crate::text_ops::{self, Pattern, Replacement, ScanItem};

pub trait OnigStrExt {
    /// `sub(pattern, template)`
    fn onig_sub<'p>(&self, pattern: impl Into<Pattern<'p>>, template: &str) -> OnigResult<String>;

    /// `sub(pattern) { |matched| ... }`
    fn onig_sub_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, f: F) -> OnigResult<String>
    where
        F: FnMut(&str) -> String;

    fn onig_gsub<'p>(&self, pattern: impl Into<Pattern<'p>>, template: &str) -> OnigResult<String>;

    fn onig_gsub_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, f: F) -> OnigResult<String>
    where
        F: FnMut(&str) -> String;

    /// `split(pattern, limit)`; see [`text_ops::split`] for the limit rules
    fn onig_split<'p>(&self, pattern: impl Into<Pattern<'p>>, limit: i64) -> Vec<String>;

    /// `split` without a pattern
    fn onig_split_whitespace(&self, limit: i64) -> Vec<String>;

    fn onig_scan<'p>(&self, pattern: impl Into<Pattern<'p>>) -> Vec<ScanItem>;

    /// `scan(pattern) { |...| ... }`, returns the receiver
    fn onig_scan_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, f: F) -> &str
    where
        F: FnMut(&ScanItem);

    /// `=~`: byte offset of the first match. A string pattern is compiled as
    /// a regexp; any failure reads as no match.
    fn onig_match_index<'p>(&self, pattern: impl Into<Pattern<'p>>) -> Option<usize>;
}

impl OnigStrExt for str {
    fn onig_sub<'p>(&self, pattern: impl Into<Pattern<'p>>, template: &str) -> OnigResult<String> {
        text_ops::sub(self, pattern.into(), Replacement::Template(template))
    }

    fn onig_sub_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, mut f: F) -> OnigResult<String>
    where
        F: FnMut(&str) -> String,
    {
        text_ops::sub(self, pattern.into(), Replacement::Block(&mut f))
    }

    fn onig_gsub<'p>(&self, pattern: impl Into<Pattern<'p>>, template: &str) -> OnigResult<String> {
        text_ops::gsub(self, pattern.into(), Replacement::Template(template))
    }

    fn onig_gsub_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, mut f: F) -> OnigResult<String>
    where
        F: FnMut(&str) -> String,
    {
        text_ops::gsub(self, pattern.into(), Replacement::Block(&mut f))
    }

    fn onig_split<'p>(&self, pattern: impl Into<Pattern<'p>>, limit: i64) -> Vec<String> {
        text_ops::split(self, Some(pattern.into()), limit)
    }

    fn onig_split_whitespace(&self, limit: i64) -> Vec<String> {
        text_ops::split(self, None, limit)
    }

    fn onig_scan<'p>(&self, pattern: impl Into<Pattern<'p>>) -> Vec<ScanItem> {
        text_ops::scan(self, pattern.into())
    }

    fn onig_scan_with<'p, F>(&self, pattern: impl Into<Pattern<'p>>, f: F) -> &str
    where
        F: FnMut(&ScanItem),
    {
        text_ops::scan_with(self, pattern.into(), f)
    }

    fn onig_match_index<'p>(&self, pattern: impl Into<Pattern<'p>>) -> Option<usize> {
        let result = match pattern.into() {
            Pattern::Regexp(regexp) => regexp.match_index(self),
            Pattern::Literal(source) => {
                Regexp::new(source, Options::NONE).and_then(|regexp| regexp.match_index(self))
            }
        };
        result.unwrap_or_else(|e| {
            debug!("=~ treated as no match: {}", e);
            None
        })
    }
}
