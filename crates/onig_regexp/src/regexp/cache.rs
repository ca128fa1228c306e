use ahash::RandomState;
use log::*;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{Options, Regexp};
use crate::error::OnigResult;
use crate::option::{EngineOption, SyntaxKind};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    options: Options,
    syntax: SyntaxKind,
}

/// Memo of compiled patterns keyed by constructor arguments.
///
/// Same arguments return the same instance. Entries are never evicted;
/// patterns are expected to come from program text, not from user input.
/// A failed compilation leaves nothing behind.
pub struct PatternCache {
    option: EngineOption,
    memo: HashMap<CacheKey, Regexp, RandomState>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::with_option(EngineOption::default())
    }

    pub fn with_option(option: EngineOption) -> Self {
        let memo = HashMap::with_capacity_and_hasher(option.cache_capacity, RandomState::new());
        Self { option, memo }
    }

    pub fn option(&self) -> &EngineOption {
        &self.option
    }

    pub fn compile(&mut self, pattern: &str, options: impl Into<Options>) -> OnigResult<Regexp> {
        let key = CacheKey {
            pattern: pattern.to_string(),
            options: options.into(),
            syntax: self.option.syntax,
        };

        if let Some(regexp) = self.memo.get(&key) {
            return Ok(regexp.clone());
        }

        debug!("pattern cache miss: /{}/{}", key.pattern, key.options);
        let regexp = Regexp::with_option(pattern, key.options, &self.option)?;
        self.memo.insert(key, regexp.clone());
        Ok(regexp)
    }

    pub fn compile_value(&mut self, pattern: &str, options: &Value) -> OnigResult<Regexp> {
        self.compile(pattern, Options::from_value(options)?)
    }

    pub fn contains(&self, pattern: &str, options: impl Into<Options>) -> bool {
        let key = CacheKey {
            pattern: pattern.to_string(),
            options: options.into(),
            syntax: self.option.syntax,
        };
        self.memo.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn clear(&mut self) {
        self.memo.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static DEFAULT_CACHE: RefCell<PatternCache> = RefCell::new(PatternCache::new());
}

/// Run `f` against this thread's default cache (the one behind
/// `Regexp::compile`).
pub fn with_default_cache<R>(f: impl FnOnce(&mut PatternCache) -> R) -> R {
    DEFAULT_CACHE.with(|cache| f(&mut cache.borrow_mut()))
}
