// Compiled regular expressions
//
// A `Regexp` owns one compiled engine handle plus the pattern text and flags
// it was built from. Cloning shares the handle; equality is by
// (source, options), never by identity.

mod cache;
mod engine;
mod options;

pub use cache::{PatternCache, with_default_cache};
pub use options::Options;

pub(crate) use engine::NameTable;

use log::*;
use smol_str::SmolStr;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::OnigResult;
use crate::match_data::MatchData;
use crate::option::{EngineOption, SyntaxKind};
use crate::value::Value;
use engine::Engine;

thread_local! {
    // Most recent successful match on this thread
    static LAST_MATCH: RefCell<Option<MatchData>> = const { RefCell::new(None) };
}

struct RegexpInner {
    source: String,
    options: Options,
    syntax: SyntaxKind,
    engine: Engine,
}

#[derive(Clone)]
pub struct Regexp {
    inner: Rc<RegexpInner>,
}

impl Regexp {
    pub const IGNORECASE: Options = Options::IGNORECASE;
    pub const EXTENDED: Options = Options::EXTENDED;
    pub const MULTILINE: Options = Options::MULTILINE;

    /// Compile `pattern` with the default engine option (Ruby syntax).
    pub fn new(pattern: &str, options: impl Into<Options>) -> OnigResult<Self> {
        Self::with_option(pattern, options.into(), &EngineOption::default())
    }

    pub fn with_option(pattern: &str, options: Options, option: &EngineOption) -> OnigResult<Self> {
        let engine = Engine::compile(pattern, options, option.syntax)?;
        Ok(Self {
            inner: Rc::new(RegexpInner {
                source: pattern.to_string(),
                options,
                syntax: option.syntax,
                engine,
            }),
        })
    }

    /// Constructor taking the options argument as the script passed it:
    /// nil, `true`, an integer or a letter string.
    pub fn from_value(pattern: &str, options: &Value) -> OnigResult<Self> {
        Self::new(pattern, Options::from_value(options)?)
    }

    /// Cache-backed constructor: identical arguments on the same thread
    /// return the same instance.
    pub fn compile(pattern: &str, options: impl Into<Options>) -> OnigResult<Self> {
        let options = options.into();
        with_default_cache(|cache| cache.compile(pattern, options))
    }

    pub fn source(&self) -> &str {
        &self.inner.source
    }

    pub fn options(&self) -> Options {
        self.inner.options
    }

    pub fn syntax(&self) -> SyntaxKind {
        self.inner.syntax
    }

    /// `casefold?`
    pub fn casefold(&self) -> bool {
        self.inner.options.contains(Options::IGNORECASE)
    }

    /// Number of capture groups, whole match not counted
    pub fn captures_len(&self) -> usize {
        self.inner.engine.captures_len()
    }

    pub fn names(&self) -> &[SmolStr] {
        self.inner.engine.names().names()
    }

    pub(crate) fn name_table(&self) -> &NameTable {
        self.inner.engine.names()
    }

    /// Same compiled handle, not merely equal
    pub fn ptr_eq(a: &Regexp, b: &Regexp) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// First match in `subject` at or after byte offset `pos`.
    ///
    /// A start position outside `[0, len)` is "no match", so an empty subject
    /// never matches. Engine failures during the search are errors.
    pub fn match_at(&self, subject: &Rc<str>, pos: i64) -> OnigResult<Option<MatchData>> {
        if pos < 0 || pos as usize >= subject.len() {
            return Ok(None);
        }
        self.search(subject, 0, pos as usize)
    }

    /// Match against `subject[base..]` as if it were the whole string, so
    /// anchors see the suffix. The buffer is shared, not copied; offsets in
    /// the result are relative to `base`.
    pub(crate) fn match_suffix(
        &self,
        subject: &Rc<str>,
        base: usize,
    ) -> OnigResult<Option<MatchData>> {
        if base >= subject.len() {
            return Ok(None);
        }
        self.search(subject, base, 0)
    }

    fn search(&self, subject: &Rc<str>, base: usize, pos: usize) -> OnigResult<Option<MatchData>> {
        let text = &subject[base..];
        let mut start = pos;
        while !text.is_char_boundary(start) {
            start += 1;
        }

        let Some(slots) = self.inner.engine.search(text, start)? else {
            return Ok(None);
        };

        let m = MatchData::new(Rc::clone(subject), base, slots, self.clone());
        LAST_MATCH.with(|last| *last.borrow_mut() = Some(m.clone()));
        Ok(Some(m))
    }

    pub fn match_str(&self, subject: &str) -> OnigResult<Option<MatchData>> {
        self.match_at(&Rc::from(subject), 0)
    }

    /// `===`: a failing search counts as no match
    pub fn is_match(&self, subject: &str) -> bool {
        match self.match_str(subject) {
            Ok(m) => m.is_some(),
            Err(e) => {
                debug!("search for /{}/ failed: {}", self.source(), e);
                false
            }
        }
    }

    /// `=~`: byte offset of the first match
    pub fn match_index(&self, subject: &str) -> OnigResult<Option<usize>> {
        Ok(self.match_str(subject)?.map(|m| m.pre_match().len()))
    }

    /// Most recent successful match on this thread, by any regexp
    pub fn last_match() -> Option<MatchData> {
        LAST_MATCH.with(|last| last.borrow().clone())
    }

    pub fn clear_last_match() {
        LAST_MATCH.with(|last| *last.borrow_mut() = None);
    }

    /// Version of the underlying Oniguruma library
    pub fn version() -> String {
        engine::version()
    }
}

impl PartialEq for Regexp {
    fn eq(&self, other: &Self) -> bool {
        Regexp::ptr_eq(self, other)
            || (self.inner.options == other.inner.options
                && self.inner.source == other.inner.source)
    }
}

impl Eq for Regexp {}

impl Hash for Regexp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.source.hash(state);
        self.inner.options.hash(state);
    }
}

/// `/source/flags`
impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.inner.source, self.inner.options)
    }
}

impl fmt::Debug for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regexp")
            .field("source", &self.inner.source)
            .field("options", &self.inner.options)
            .field("syntax", &self.inner.syntax)
            .field("engine", &self.inner.engine)
            .finish()
    }
}
