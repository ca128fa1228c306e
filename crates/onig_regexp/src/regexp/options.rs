use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::error::{OnigError, OnigResult};
use crate::value::Value;

/// Regexp compile flags, bit-compatible with Oniguruma's own option bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32")
)]
pub struct Options(u32);

impl Options {
    pub const NONE: Options = Options(0);
    pub const IGNORECASE: Options = Options(1);
    pub const EXTENDED: Options = Options(2);
    pub const MULTILINE: Options = Options(4);

    const ALL: u32 = 1 | 2 | 4;

    /// Keep only the bits the engine understands; anything else is dropped
    /// silently, like the integer form of the constructor argument.
    pub const fn from_bits_truncate(bits: i64) -> Self {
        Options((bits as u32) & Self::ALL)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse the letter form: any of `i`, `x`, `m`; other letters are ignored.
    pub fn from_letters(flags: &str) -> Self {
        let mut options = Options::NONE;
        if flags.contains('i') {
            options |= Options::IGNORECASE;
        }
        if flags.contains('x') {
            options |= Options::EXTENDED;
        }
        if flags.contains('m') {
            options |= Options::MULTILINE;
        }
        options
    }

    /// Convert a dynamically typed constructor argument.
    ///
    /// nil means no flags, `true` is shorthand for IGNORECASE, integers and
    /// letter strings are decoded; everything else is rejected.
    pub fn from_value(value: &Value) -> OnigResult<Self> {
        match value {
            Value::Nil => Ok(Options::NONE),
            Value::Bool(true) => Ok(Options::IGNORECASE),
            Value::Integer(bits) => Ok(Options::from_bits_truncate(*bits)),
            Value::Str(letters) => Ok(Options::from_letters(letters)),
            other => Err(OnigError::UnknownFlag(other.to_string())),
        }
    }

    pub(crate) fn to_onig(self) -> onig::RegexOptions {
        let mut options = onig::RegexOptions::REGEX_OPTION_NONE;
        if self.contains(Options::IGNORECASE) {
            options |= onig::RegexOptions::REGEX_OPTION_IGNORECASE;
        }
        if self.contains(Options::EXTENDED) {
            options |= onig::RegexOptions::REGEX_OPTION_EXTEND;
        }
        if self.contains(Options::MULTILINE) {
            options |= onig::RegexOptions::REGEX_OPTION_MULTILINE;
        }
        options
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Options) {
        self.0 |= rhs.0;
    }
}

impl From<bool> for Options {
    fn from(casefold: bool) -> Self {
        if casefold {
            Options::IGNORECASE
        } else {
            Options::NONE
        }
    }
}

impl From<u32> for Options {
    fn from(bits: u32) -> Self {
        Options::from_bits_truncate(bits as i64)
    }
}

impl From<i64> for Options {
    fn from(bits: i64) -> Self {
        Options::from_bits_truncate(bits)
    }
}

impl From<&str> for Options {
    fn from(letters: &str) -> Self {
        Options::from_letters(letters)
    }
}

/// Letter form in the order the host prints it: `m`, `i`, `x`.
impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Options::MULTILINE) {
            f.write_str("m")?;
        }
        if self.contains(Options::IGNORECASE) {
            f.write_str("i")?;
        }
        if self.contains(Options::EXTENDED) {
            f.write_str("x")?;
        }
        Ok(())
    }
}
