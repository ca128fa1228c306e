// Engine adapter
//
// Thin layer over the `onig` crate. Everything above this module sees the
// engine as two capabilities: compile(pattern, flags) and
// search(subject, start) -> capture spans. Offsets are byte offsets into
// the subject; Oniguruma runs in UTF-8 mode so every span lands on a char
// boundary.

use ahash::RandomState;
use log::*;
use onig::{MatchParam, Region, SearchOptions};
use smol_str::SmolStr;
use std::collections::HashMap;

use super::options::Options;
use crate::error::{OnigError, OnigResult};
use crate::match_data::Span;
use crate::option::SyntaxKind;

/// Group name → group numbers. A name can be defined more than once (in
/// different alternation branches), so it maps to a list.
#[derive(Debug, Default)]
pub struct NameTable {
    groups: HashMap<SmolStr, Vec<usize>, RandomState>,
    // Definition order, by first group number
    order: Vec<SmolStr>,
}

impl NameTable {
    pub fn names(&self) -> &[SmolStr] {
        &self.order
    }

    pub fn groups(&self, name: &str) -> Option<&[usize]> {
        self.groups.get(name).map(|v| v.as_slice())
    }

    fn insert(&mut self, name: &str, groups: &[u32]) {
        let mut numbers: Vec<usize> = groups.iter().map(|&g| g as usize).collect();
        numbers.sort_unstable();
        let key = SmolStr::new(name);
        self.order.push(key.clone());
        self.groups.insert(key, numbers);
    }

    fn finish(&mut self) {
        let groups = &self.groups;
        self.order
            .sort_by_key(|name| groups.get(name).and_then(|g| g.first().copied()));
    }
}

pub struct Engine {
    regex: onig::Regex,
    names: NameTable,
}

impl Engine {
    pub fn compile(pattern: &str, options: Options, syntax: SyntaxKind) -> OnigResult<Self> {
        let regex = onig::Regex::with_options(pattern, options.to_onig(), syntax.syntax())
            .map_err(|e| OnigError::Compile {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        let mut names = NameTable::default();
        regex.foreach_name(|name, groups| {
            names.insert(name, groups);
            true
        });
        names.finish();

        debug!(
            "compiled /{}/{} ({} groups, {} names)",
            pattern,
            options,
            regex.captures_len(),
            names.order.len()
        );
        Ok(Self { regex, names })
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Number of capture groups, not counting the whole match
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// First match at or after `start`. Returns one slot per group, slot 0
    /// being the whole match; groups that did not participate are `None`.
    pub fn search(&self, subject: &str, start: usize) -> OnigResult<Option<Vec<Option<Span>>>> {
        let mut region = Region::new();
        let found = self
            .regex
            .search_with_param(
                subject,
                start,
                subject.len(),
                SearchOptions::SEARCH_OPTION_NONE,
                Some(&mut region),
                MatchParam::default(),
            )
            .map_err(|e| OnigError::Search(e.to_string()))?;

        if found.is_none() {
            return Ok(None);
        }

        let slots = (0..region.len())
            .map(|i| region.pos(i).map(|(begin, end)| Span::new(begin, end - begin)))
            .collect();
        Ok(Some(slots))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("captures", &self.regex.captures_len())
            .field("names", &self.names)
            .finish()
    }
}

/// Version string of the linked Oniguruma library.
pub fn version() -> String {
    onig::version()
}
