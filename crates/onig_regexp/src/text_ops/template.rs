// Replacement template expansion
//
// Supported escapes:
// - \0, \&: whole match
// - \1-\9: positional capture
// - \k<name>: named capture
// - \`, \': pre-match / post-match
// - \\: literal backslash
// Any other escape is copied as written.

use crate::error::{OnigError, OnigResult};
use crate::match_data::MatchData;

/// What a template can reference from one match.
pub(crate) trait MatchSource {
    /// `None` when group `index` does not exist, `Some(None)` when it exists
    /// but did not take part in the match.
    fn group(&self, index: usize) -> Option<Option<&str>>;

    fn named_group(&self, name: &str) -> OnigResult<Option<&str>>;

    fn pre_match(&self) -> &str;

    fn post_match(&self) -> &str;

    fn matched(&self) -> &str {
        self.group(0).flatten().unwrap_or("")
    }
}

impl MatchSource for MatchData {
    fn group(&self, index: usize) -> Option<Option<&str>> {
        if index < self.len() {
            Some(MatchData::group(self, index))
        } else {
            None
        }
    }

    fn named_group(&self, name: &str) -> OnigResult<Option<&str>> {
        self.get(name)
    }

    fn pre_match(&self) -> &str {
        MatchData::pre_match(self)
    }

    fn post_match(&self) -> &str {
        MatchData::post_match(self)
    }
}

/// Append `template` to `out`, resolving back-references against `source`.
pub(crate) fn expand<M: MatchSource + ?Sized>(
    template: &str,
    source: &M,
    out: &mut String,
) -> OnigResult<()> {
    // Fast path: nothing to resolve
    if !template.contains('\\') {
        out.push_str(template);
        return Ok(());
    }

    let bytes = template.as_bytes();
    let mut copied = 0; // start of the pending literal run
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let Some(&next) = bytes.get(i + 1) else {
            // Trailing backslash, copied with the final run
            break;
        };

        let resolved: Option<&str>;
        let consumed: usize;
        match next {
            b'0'..=b'9' => {
                let n = (next - b'0') as usize;
                let Some(text) = source.group(n) else {
                    return Err(OnigError::InvalidGroupReference(n));
                };
                resolved = Some(text.unwrap_or(""));
                consumed = 2;
            }
            b'&' => {
                resolved = Some(source.matched());
                consumed = 2;
            }
            b'`' => {
                resolved = Some(source.pre_match());
                consumed = 2;
            }
            b'\'' => {
                resolved = Some(source.post_match());
                consumed = 2;
            }
            b'\\' => {
                resolved = Some("\\");
                consumed = 2;
            }
            b'k' if bytes.get(i + 2) == Some(&b'<') => match template[i + 3..].find('>') {
                Some(close) => {
                    let name = &template[i + 3..i + 3 + close];
                    resolved = Some(source.named_group(name)?.unwrap_or(""));
                    consumed = 3 + close + 1;
                }
                None => {
                    resolved = None;
                    consumed = 2;
                }
            },
            _ => {
                resolved = None;
                consumed = 2;
            }
        }

        if let Some(text) = resolved {
            out.push_str(&template[copied..i]);
            out.push_str(text);
            copied = i + consumed;
        }
        // Unresolved escapes stay in the pending run and are copied verbatim
        i += consumed;
    }

    out.push_str(&template[copied..]);
    Ok(())
}
