// Regexp-driven string operations
// Implements: sub, gsub, split, scan (plus callback forms)
//
// Regexp patterns go through the suffix cursor in `cursor`; literal string
// patterns keep plain substring semantics (see `literal`).

mod cursor;
mod literal;
mod template;

pub use cursor::Iteration;

pub(crate) use cursor::{each_match, regexp_step};

use log::*;
use std::convert::Infallible;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::error::{OnigError, OnigResult};
use crate::match_data::MatchData;
use crate::regexp::Regexp;
use template::MatchSource;

/// What to search for: a compiled regexp or a literal substring
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'p> {
    Literal(&'p str),
    Regexp(&'p Regexp),
}

impl<'p> From<&'p str> for Pattern<'p> {
    fn from(literal: &'p str) -> Self {
        Pattern::Literal(literal)
    }
}

impl<'p> From<&'p String> for Pattern<'p> {
    fn from(literal: &'p String) -> Self {
        Pattern::Literal(literal.as_str())
    }
}

impl<'p> From<&'p Regexp> for Pattern<'p> {
    fn from(regexp: &'p Regexp) -> Self {
        Pattern::Regexp(regexp)
    }
}

/// Replacement for `sub`/`gsub`: a template with back-references, or a
/// callback that receives the matched text.
pub enum Replacement<'r> {
    Template(&'r str),
    Block(&'r mut dyn FnMut(&str) -> String),
}

impl Replacement<'_> {
    fn apply<M: MatchSource + ?Sized>(&mut self, m: &M, out: &mut String) -> OnigResult<()> {
        match self {
            Replacement::Template(text) => template::expand(text, m, out),
            Replacement::Block(f) => {
                out.push_str(&(**f)(m.matched()));
                Ok(())
            }
        }
    }
}

impl<'r> From<&'r str> for Replacement<'r> {
    fn from(template: &'r str) -> Self {
        Replacement::Template(template)
    }
}

/// One element of a `scan` result: the whole match when the pattern has no
/// groups, otherwise the positional captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanItem {
    Match(String),
    Captures(Vec<Option<String>>),
}

impl ScanItem {
    fn from_match(m: &MatchData) -> Self {
        if m.len() > 1 {
            ScanItem::Captures(
                m.captures()
                    .into_iter()
                    .map(|c| c.map(str::to_string))
                    .collect(),
            )
        } else {
            ScanItem::Match(m.as_str().to_string())
        }
    }

    /// Whole match, or the first capture
    pub fn first(&self) -> Option<&str> {
        match self {
            ScanItem::Match(s) => Some(s),
            ScanItem::Captures(caps) => caps.first().and_then(|c| c.as_deref()),
        }
    }
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Replace the first match. No match, or an engine failure, leaves the
/// subject unchanged.
pub fn sub(
    subject: &str,
    pattern: Pattern<'_>,
    mut replacement: Replacement<'_>,
) -> OnigResult<String> {
    match pattern {
        Pattern::Literal(needle) => literal::sub(subject, needle, &mut replacement),
        Pattern::Regexp(regexp) => sub_by(subject, regexp_step(regexp), &mut replacement),
    }
}

pub(crate) fn sub_by<S>(
    subject: &str,
    mut step: S,
    replacement: &mut Replacement<'_>,
) -> OnigResult<String>
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
{
    let m = match step(&Rc::from(subject), 0) {
        Ok(Some(m)) => m,
        Ok(None) => return Ok(subject.to_string()),
        Err(e) => {
            warn!("sub: match failed, subject left unchanged: {}", e);
            return Ok(subject.to_string());
        }
    };

    let mut out = String::with_capacity(subject.len());
    out.push_str(m.pre_match());
    replacement.apply(&m, &mut out)?;
    out.push_str(m.post_match());
    Ok(out)
}

/// Replace every match. An engine failure mid-way keeps the replacements
/// made so far and the untouched rest of the subject.
pub fn gsub(
    subject: &str,
    pattern: Pattern<'_>,
    mut replacement: Replacement<'_>,
) -> OnigResult<String> {
    match pattern {
        Pattern::Literal(needle) => literal::gsub(subject, needle, &mut replacement),
        Pattern::Regexp(regexp) => gsub_by(subject, regexp_step(regexp), &mut replacement),
    }
}

pub(crate) fn gsub_by<S>(
    subject: &str,
    step: S,
    replacement: &mut Replacement<'_>,
) -> OnigResult<String>
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
{
    let shared: Rc<str> = Rc::from(subject);
    let mut out = String::with_capacity(subject.len());
    let iteration = each_match(&shared, step, |m| {
        out.push_str(m.pre_match());
        replacement.apply(m, &mut out)?;
        Ok::<_, OnigError>(ControlFlow::Continue(()))
    })?;

    out.push_str(&subject[iteration.into_partial()..]);
    Ok(out)
}

/// Split around matches. `None` splits on whitespace.
///
/// `limit`: 0 is unbounded with trailing empty strings removed, negative is
/// unbounded with them kept, positive `n` yields at most `n` pieces.
pub fn split(subject: &str, pattern: Option<Pattern<'_>>, limit: i64) -> Vec<String> {
    if subject.is_empty() {
        return Vec::new();
    }

    let mut pieces = match pattern {
        None => literal::split_whitespace(subject, limit),
        Some(Pattern::Literal(needle)) => literal::split(subject, needle, limit),
        Some(Pattern::Regexp(regexp)) => split_by(subject, regexp_step(regexp), limit),
    };

    if limit >= 0 {
        while pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
        }
    }
    pieces
}

/// Regexp split before trailing-empty handling. An engine failure ends the
/// loop; the pieces so far plus the unscanned rest are returned.
pub(crate) fn split_by<S>(subject: &str, step: S, limit: i64) -> Vec<String>
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
{
    if subject.is_empty() {
        return Vec::new();
    }
    if limit == 1 {
        return vec![subject.to_string()];
    }

    let shared: Rc<str> = Rc::from(subject);
    let mut pieces = Vec::new();
    let iteration = unwrap_infallible(each_match(&shared, step, |m| {
        pieces.push(m.pre_match().to_string());
        if limit > 0 && pieces.len() as i64 >= limit - 1 {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }));

    pieces.push(subject[iteration.into_partial()..].to_string());
    pieces
}

/// Collect every match. An engine failure discards everything: the result
/// is empty.
pub fn scan(subject: &str, pattern: Pattern<'_>) -> Vec<ScanItem> {
    match pattern {
        Pattern::Literal(needle) => literal::scan(subject, needle),
        Pattern::Regexp(regexp) => scan_by(subject, regexp_step(regexp)),
    }
}

pub(crate) fn scan_by<S>(subject: &str, step: S) -> Vec<ScanItem>
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
{
    let mut items = Vec::new();
    let iteration = unwrap_infallible(each_match(&Rc::from(subject), step, |m| {
        items.push(ScanItem::from_match(m));
        Ok(ControlFlow::Continue(()))
    }));

    match iteration {
        Iteration::Finished(_) => items,
        Iteration::Interrupted { .. } => Vec::new(),
    }
}

/// Call `f` once per match and give back the subject itself.
pub fn scan_with<'s, F>(subject: &'s str, pattern: Pattern<'_>, f: F) -> &'s str
where
    F: FnMut(&ScanItem),
{
    match pattern {
        Pattern::Literal(needle) => literal::scan(subject, needle).iter().for_each(f),
        Pattern::Regexp(regexp) => scan_with_by(subject, regexp_step(regexp), f),
    }
    subject
}

pub(crate) fn scan_with_by<S, F>(subject: &str, step: S, mut f: F)
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
    F: FnMut(&ScanItem),
{
    let iteration = unwrap_infallible(each_match(&Rc::from(subject), step, |m| {
        f(&ScanItem::from_match(m));
        Ok(ControlFlow::Continue(()))
    }));

    if let Iteration::Interrupted { reason, .. } = iteration {
        debug!("scan stopped early: {}", reason);
    }
}
