// Suffix iteration shared by gsub, split and scan
//
// The cursor is a byte offset into one shared subject buffer; everything
// from it on is the unscanned remainder. Each step matches the pattern
// against that remainder alone (anchors see the suffix as a whole string),
// hands the match to the caller and moves the cursor past the match. The
// loop stops on no match, or on a zero-width match at the very start of the
// suffix, since the cursor could not advance.

use log::*;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::error::{OnigError, OnigResult};
use crate::match_data::MatchData;
use crate::regexp::Regexp;

/// How a multi-match operation ended. Engine failures do not propagate out
/// of the loop: they end it early and keep what was produced so far, and
/// each operation decides what to make of a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum Iteration<T> {
    Finished(T),
    Interrupted { partial: T, reason: OnigError },
}

impl<T> Iteration<T> {
    pub fn is_finished(&self) -> bool {
        matches!(self, Iteration::Finished(_))
    }

    /// The value either way
    pub fn into_partial(self) -> T {
        match self {
            Iteration::Finished(value) => value,
            Iteration::Interrupted { partial, .. } => partial,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Iteration<U> {
        match self {
            Iteration::Finished(value) => Iteration::Finished(f(value)),
            Iteration::Interrupted { partial, reason } => Iteration::Interrupted {
                partial: f(partial),
                reason,
            },
        }
    }
}

/// One matching step against the suffix of `subject` starting at `base`
pub(crate) fn regexp_step(
    regexp: &Regexp,
) -> impl FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>> + '_ {
    move |subject: &Rc<str>, base: usize| regexp.match_suffix(subject, base)
}

/// Drive `step` over the suffixes of `subject`, calling `on_match` for each
/// match that advances the cursor. Returns the byte offset where the
/// unscanned rest begins.
///
/// Errors from `on_match` propagate; errors from `step` interrupt the loop.
pub(crate) fn each_match<S, F, E>(
    subject: &Rc<str>,
    mut step: S,
    mut on_match: F,
) -> Result<Iteration<usize>, E>
where
    S: FnMut(&Rc<str>, usize) -> OnigResult<Option<MatchData>>,
    F: FnMut(&MatchData) -> Result<ControlFlow<()>, E>,
{
    let mut rest = 0;

    loop {
        let m = match step(subject, rest) {
            Ok(Some(m)) => m,
            Ok(None) => break,
            Err(reason) => {
                warn!(
                    "match failed with {} bytes left, returning partial result: {}",
                    subject.len() - rest,
                    reason
                );
                return Ok(Iteration::Interrupted {
                    partial: rest,
                    reason,
                });
            }
        };

        let end = m.span().end();
        if end == 0 {
            trace!("zero-width match at cursor start, stopping");
            break;
        }

        let flow = on_match(&m)?;
        rest += end;
        trace!("cursor advanced by {} bytes", end);

        if flow.is_break() {
            break;
        }
    }

    Ok(Iteration::Finished(rest))
}
