use smol_str::SmolStr;
use thiserror::Error;

pub type OnigResult<T> = Result<T, OnigError>;

/// Host exception class an error maps to when it crosses into a script runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// ArgumentError - bad pattern text or flag argument
    Argument,
    /// IndexError - unknown group name or position out of the match
    Index,
    /// TypeError - an index argument of the wrong type
    Type,
    /// RegexpError - the engine failed while searching
    Regexp,
}

/// Errors returned by compilation, match-data queries and template expansion.
///
/// "No match" is never an error: lookups that can miss return `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnigError {
    /// Pattern text rejected by the engine.
    #[error("'{pattern}' is an invalid regular expression because {reason}.")]
    Compile { pattern: String, reason: String },

    /// Options argument of an unsupported type.
    #[error("unknown regexp flag: {0}")]
    UnknownFlag(String),

    /// Positional group outside `[0, len)` passed to `begin`/`end`/`offset`.
    #[error("index {0} out of matches")]
    IndexOutOfRange(i64),

    /// Group name that the pattern does not define.
    #[error("undefined group name reference: {0}")]
    UndefinedGroupName(SmolStr),

    /// `\N` in a replacement template past the last capture group.
    #[error("invalid group reference \\{0} in replacement template")]
    InvalidGroupReference(usize),

    #[error("no implicit conversion of {0} into Integer")]
    Type(&'static str),

    /// Search aborted inside the engine.
    #[error("{0}")]
    Search(String),
}

impl OnigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OnigError::Compile { .. } | OnigError::UnknownFlag(_) => ErrorKind::Argument,
            OnigError::IndexOutOfRange(_)
            | OnigError::UndefinedGroupName(_)
            | OnigError::InvalidGroupReference(_) => ErrorKind::Index,
            OnigError::Type(_) => ErrorKind::Type,
            OnigError::Search(_) => ErrorKind::Regexp,
        }
    }
}
