// Match data
//
// Immutable snapshot of one successful match. Holds the subject string by
// shared ownership (never copied), one slot per capture group (slot 0 is the
// whole match) and the regexp that produced it, which also owns the group
// name table. A match taken on a suffix of the buffer keeps the buffer and
// records where the suffix starts; every offset is relative to that start.

use smol_str::SmolStr;
use std::rc::Rc;

use crate::error::{OnigError, OnigResult};
use crate::regexp::Regexp;
use crate::value::Value;

/// Byte range of one capture inside the subject string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub begin: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(begin: usize, len: usize) -> Self {
        Self { begin, len }
    }

    pub const fn end(&self) -> usize {
        self.begin + self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Group selector: a position (negative counts from the end, only for `get`)
/// or a group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index<'a> {
    Position(i64),
    Name(&'a str),
}

impl From<i64> for Index<'_> {
    fn from(i: i64) -> Self {
        Index::Position(i)
    }
}

impl From<i32> for Index<'_> {
    fn from(i: i32) -> Self {
        Index::Position(i as i64)
    }
}

impl From<usize> for Index<'_> {
    fn from(i: usize) -> Self {
        // Saturate: a wrapped value would read as counting from the end
        Index::Position(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a str> for Index<'a> {
    fn from(name: &'a str) -> Self {
        Index::Name(name)
    }
}

impl<'a> From<&'a SmolStr> for Index<'a> {
    fn from(name: &'a SmolStr) -> Self {
        Index::Name(name.as_str())
    }
}

/// Integers select by position, strings and symbols by name; anything else
/// is a type error.
impl<'a> TryFrom<&'a Value> for Index<'a> {
    type Error = OnigError;

    fn try_from(value: &'a Value) -> OnigResult<Self> {
        match value {
            Value::Integer(i) => Ok(Index::Position(*i)),
            Value::Str(name) => Ok(Index::Name(name.as_str())),
            Value::Symbol(name) => Ok(Index::Name(name.as_str())),
            other => Err(OnigError::Type(other.type_name())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchData {
    string: Rc<str>,
    // Start of the matched text inside `string`
    base: usize,
    slots: Vec<Option<Span>>,
    regexp: Regexp,
}

impl MatchData {
    pub(crate) fn new(
        string: Rc<str>,
        base: usize,
        slots: Vec<Option<Span>>,
        regexp: Regexp,
    ) -> Self {
        debug_assert!(matches!(slots.first(), Some(Some(_))));
        debug_assert!(string.is_char_boundary(base));
        Self {
            string,
            base,
            slots,
            regexp,
        }
    }

    /// The subject the match ran against
    pub fn string(&self) -> &str {
        &self.string[self.base..]
    }

    /// Buffer shared with the caller; `string()` is its tail from `base()`.
    pub fn shared_string(&self) -> &Rc<str> {
        &self.string
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn regexp(&self) -> &Regexp {
        &self.regexp
    }

    pub fn slots(&self) -> &[Option<Span>] {
        &self.slots
    }

    /// Slot count, whole match included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Span of the whole match
    pub fn span(&self) -> Span {
        self.slots
            .first()
            .copied()
            .flatten()
            .unwrap_or(Span::new(0, 0))
    }

    /// Substring of slot `i`; `None` if the group is absent or does not exist.
    pub fn group(&self, i: usize) -> Option<&str> {
        self.slots
            .get(i)
            .copied()
            .flatten()
            .map(|span| &self.string()[span.begin..span.end()])
    }

    /// Group number a name resolves to. With duplicate names the last group
    /// that took part in the match wins; if none did, the last definition.
    fn name_to_group(&self, name: &str) -> OnigResult<usize> {
        let groups = self
            .regexp
            .name_table()
            .groups(name)
            .ok_or_else(|| OnigError::UndefinedGroupName(SmolStr::new(name)))?;
        groups
            .iter()
            .rev()
            .find(|&&g| matches!(self.slots.get(g), Some(Some(_))))
            .or(groups.last())
            .copied()
            .ok_or_else(|| OnigError::UndefinedGroupName(SmolStr::new(name)))
    }

    /// Strict resolution used by `begin`/`end`/`offset`
    fn resolve<'a>(&self, index: impl Into<Index<'a>>) -> OnigResult<usize> {
        match index.into() {
            Index::Position(i) if i >= 0 && (i as usize) < self.slots.len() => Ok(i as usize),
            Index::Position(i) => Err(OnigError::IndexOutOfRange(i)),
            Index::Name(name) => self.name_to_group(name),
        }
    }

    /// Start offset of a group; `Ok(None)` when the group did not participate.
    pub fn begin<'a>(&self, index: impl Into<Index<'a>>) -> OnigResult<Option<usize>> {
        let i = self.resolve(index)?;
        Ok(self.slots[i].map(|span| span.begin))
    }

    pub fn end<'a>(&self, index: impl Into<Index<'a>>) -> OnigResult<Option<usize>> {
        let i = self.resolve(index)?;
        Ok(self.slots[i].map(|span| span.end()))
    }

    pub fn offset<'a>(&self, index: impl Into<Index<'a>>) -> OnigResult<Option<(usize, usize)>> {
        let i = self.resolve(index)?;
        Ok(self.slots[i].map(|span| (span.begin, span.end())))
    }

    /// `m[i]` / `m[name]`.
    ///
    /// Out-of-range positions give `Ok(None)` rather than an error, unlike
    /// `begin`/`end`. Negative positions count from the end. Unknown names
    /// are an error.
    pub fn get<'a>(&self, index: impl Into<Index<'a>>) -> OnigResult<Option<&str>> {
        match index.into() {
            Index::Position(i) => {
                let len = self.slots.len() as i64;
                let i = if i < 0 { len + i } else { i };
                if i < 0 || i >= len {
                    return Ok(None);
                }
                Ok(self.group(i as usize))
            }
            Index::Name(name) => {
                let i = self.name_to_group(name)?;
                Ok(self.group(i))
            }
        }
    }

    /// `m[value]` with a dynamically typed index
    pub fn at(&self, index: &Value) -> OnigResult<Option<&str>> {
        self.get(Index::try_from(index)?)
    }

    /// Whole matched text
    pub fn as_str(&self) -> &str {
        let span = self.span();
        &self.string()[span.begin..span.end()]
    }

    pub fn pre_match(&self) -> &str {
        &self.string()[..self.span().begin]
    }

    pub fn post_match(&self) -> &str {
        &self.string()[self.span().end()..]
    }

    /// Positional captures, whole match excluded. Absent groups stay in
    /// place as `None`.
    pub fn captures(&self) -> Vec<Option<&str>> {
        (1..self.slots.len()).map(|i| self.group(i)).collect()
    }

    pub fn to_a(&self) -> Vec<Option<&str>> {
        self.captures()
    }

    pub fn names(&self) -> &[SmolStr] {
        self.regexp.names()
    }

    /// Name → text of the group that took part in the match
    pub fn named_captures(&self) -> Vec<(SmolStr, Option<&str>)> {
        self.names()
            .iter()
            .map(|name| {
                let text = self
                    .name_to_group(name)
                    .ok()
                    .and_then(|i| self.group(i));
                (name.clone(), text)
            })
            .collect()
    }

    /// `#<MatchData "whole" 1:"cap" name:"cap">`
    ///
    /// Strings are quoted with Rust's debug escaping, so control characters
    /// read `\u{1b}` where the host would print `\e`.
    pub fn inspect(&self) -> String {
        let mut out = String::from("#<MatchData ");
        push_quoted(&mut out, Some(self.as_str()));

        let mut labels: Vec<Option<&SmolStr>> = vec![None; self.slots.len()];
        for name in self.names() {
            if let Some(groups) = self.regexp.name_table().groups(name) {
                for &g in groups {
                    if let Some(label) = labels.get_mut(g) {
                        *label = Some(name);
                    }
                }
            }
        }

        let mut buffer = itoa::Buffer::new();
        for i in 1..self.slots.len() {
            out.push(' ');
            match labels[i] {
                Some(name) => out.push_str(name),
                None => out.push_str(buffer.format(i)),
            }
            out.push(':');
            push_quoted(&mut out, self.group(i));
        }
        out.push('>');
        out
    }
}

fn push_quoted(out: &mut String, text: Option<&str>) {
    match text {
        Some(text) => out.push_str(&format!("{:?}", text)),
        None => out.push_str("nil"),
    }
}

impl std::fmt::Display for MatchData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MatchData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MatchData", 3)?;
        state.serialize_field("regexp", self.regexp.source())?;
        state.serialize_field("string", self.string())?;
        state.serialize_field("slots", &self.slots)?;
        state.end()
    }
}
