// Plain substring semantics for non-regexp patterns
//
// A string pattern is matched literally, the way the host string methods
// treat it: split(" ") splits on whitespace runs, split("") splits into
// characters, an empty needle matches between every character.

use super::template::MatchSource;
use super::{Replacement, ScanItem};
use crate::error::{OnigError, OnigResult};
use smol_str::SmolStr;

/// A literal occurrence; only group 0 exists
pub(crate) struct LiteralMatch<'s> {
    subject: &'s str,
    begin: usize,
    end: usize,
}

impl MatchSource for LiteralMatch<'_> {
    fn group(&self, index: usize) -> Option<Option<&str>> {
        (index == 0).then(|| Some(&self.subject[self.begin..self.end]))
    }

    fn named_group(&self, name: &str) -> OnigResult<Option<&str>> {
        Err(OnigError::UndefinedGroupName(SmolStr::new(name)))
    }

    fn pre_match(&self) -> &str {
        &self.subject[..self.begin]
    }

    fn post_match(&self) -> &str {
        &self.subject[self.end..]
    }
}

pub(crate) fn sub(
    subject: &str,
    needle: &str,
    replacement: &mut Replacement<'_>,
) -> OnigResult<String> {
    let Some(begin) = subject.find(needle) else {
        return Ok(subject.to_string());
    };
    let m = LiteralMatch {
        subject,
        begin,
        end: begin + needle.len(),
    };

    let mut out = String::with_capacity(subject.len());
    out.push_str(m.pre_match());
    replacement.apply(&m, &mut out)?;
    out.push_str(m.post_match());
    Ok(out)
}

pub(crate) fn gsub(
    subject: &str,
    needle: &str,
    replacement: &mut Replacement<'_>,
) -> OnigResult<String> {
    let mut out = String::with_capacity(subject.len());
    let mut last_end = 0;

    for (begin, _) in subject.match_indices(needle) {
        let m = LiteralMatch {
            subject,
            begin,
            end: begin + needle.len(),
        };
        out.push_str(&subject[last_end..begin]);
        replacement.apply(&m, &mut out)?;
        last_end = m.end;
    }

    out.push_str(&subject[last_end..]);
    Ok(out)
}

pub(crate) fn split(subject: &str, needle: &str, limit: i64) -> Vec<String> {
    if needle == " " {
        return split_whitespace(subject, limit);
    }

    if needle.is_empty() {
        split_chars(subject, limit)
    } else if limit > 0 {
        subject
            .splitn(limit as usize, needle)
            .map(str::to_string)
            .collect()
    } else {
        subject.split(needle).map(str::to_string).collect()
    }
}

fn split_chars(subject: &str, limit: i64) -> Vec<String> {
    let mut pieces = Vec::new();
    for (i, c) in subject.char_indices() {
        if limit > 0 && pieces.len() as i64 == limit - 1 {
            pieces.push(subject[i..].to_string());
            return pieces;
        }
        pieces.push(c.to_string());
    }
    pieces
}

/// awk-style: leading whitespace ignored, runs of whitespace separate fields.
/// With a positive limit the last field keeps the unsplit remainder.
pub(crate) fn split_whitespace(subject: &str, limit: i64) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut field_start: Option<usize> = None;

    for (i, c) in subject.char_indices() {
        match (c.is_whitespace(), field_start) {
            (false, None) => {
                if limit > 0 && pieces.len() as i64 == limit - 1 {
                    pieces.push(subject[i..].to_string());
                    return pieces;
                }
                field_start = Some(i);
            }
            (true, Some(start)) => {
                pieces.push(subject[start..i].to_string());
                field_start = None;
            }
            _ => {}
        }
    }

    match field_start {
        Some(start) => pieces.push(subject[start..].to_string()),
        // Trailing whitespace leaves an empty last field, visible with limit < 0
        None if limit < 0 && !pieces.is_empty() => pieces.push(String::new()),
        None => {}
    }
    pieces
}

pub(crate) fn scan(subject: &str, needle: &str) -> Vec<ScanItem> {
    subject
        .match_indices(needle)
        .map(|(_, found)| ScanItem::Match(found.to_string()))
        .collect()
}
