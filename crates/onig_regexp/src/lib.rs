// Oniguruma Regexp
// Ruby-compatible Regexp, MatchData and regexp-aware string methods on top of Oniguruma

#[cfg(test)]
mod test;

pub mod error;
pub mod match_data;
pub mod option;
pub mod regexp;
pub mod string_ext;
pub mod text_ops;
pub mod value;

pub use error::{ErrorKind, OnigError, OnigResult};
pub use match_data::{Index, MatchData, Span};
pub use option::{EngineOption, SyntaxKind};
pub use regexp::{Options, PatternCache, Regexp, with_default_cache};
pub use string_ext::OnigStrExt;
pub use text_ops::{Iteration, Pattern, Replacement, ScanItem};
pub use value::Value;
