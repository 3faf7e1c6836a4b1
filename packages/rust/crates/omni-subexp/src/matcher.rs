//! Matcher capability and engine adapters.
//!
//! A [`Matcher`] is the only thing capture construction needs from a regex
//! engine: the positional substrings of the leftmost match and the group
//! names aligned with them.

use pcre2::bytes::{Regex as PcreRegex, RegexBuilder as PcreBuilder};

use crate::config::{CompileConfig, Flavor};
use crate::error::PatternError;
use crate::posix::PosixMatcher;

/// Inline option enabling duplicate group names in PCRE2.
const DUPNAMES: &str = "(?J)";

/// A compiled pattern that can report submatches by position.
pub trait Matcher: Send + Sync {
    /// Substrings of the leftmost match, one per group, whole match first.
    ///
    /// Groups that did not participate yield `""`. Returns `None` when the
    /// text does not match.
    fn find_submatch(&self, text: &str) -> Option<Vec<String>>;

    /// Group names aligned with [`Matcher::find_submatch`], `""` for unnamed
    /// groups. Position 0 is always unnamed.
    fn group_names(&self) -> Vec<String>;
}

/// Compile `pattern` with the engine selected by `config.flavor`.
///
/// # Errors
/// Returns the engine's [`PatternError`] when the pattern does not compile.
pub fn compile(pattern: &str, config: &CompileConfig) -> Result<Box<dyn Matcher>, PatternError> {
    tracing::debug!(flavor = ?config.flavor, pattern, "compiling pattern");
    match config.flavor {
        Flavor::Default => Ok(Box::new(PerlMatcher::new(pattern, config)?)),
        Flavor::Posix => Ok(Box::new(PosixMatcher::new(pattern, config)?)),
    }
}

/// Default flavor matcher backed by PCRE2.
///
/// Both `(?<name>...)` and `(?P<name>...)` are accepted and a name may be
/// used by several groups. Patterns that need a leading `(*VERB)` option
/// cannot be used since duplicate names are enabled by an inline prefix.
#[derive(Debug)]
pub struct PerlMatcher {
    re: PcreRegex,
    pattern: String,
}

impl PerlMatcher {
    /// Compile `pattern` in UTF mode with duplicate names allowed.
    ///
    /// # Errors
    /// Returns [`PatternError::Pcre2`] when PCRE2 rejects the pattern, or
    /// [`PatternError::Pcre2Compile`] when the engine error can only be
    /// reported against the prefixed pattern.
    pub fn new(pattern: &str, config: &CompileConfig) -> Result<Self, PatternError> {
        let mut builder = PcreBuilder::new();
        builder
            .utf(true)
            .caseless(config.case_insensitive)
            .multi_line(config.multi_line);

        match builder.build(&format!("{DUPNAMES}{pattern}")) {
            Ok(re) => Ok(Self {
                re,
                pattern: pattern.to_owned(),
            }),
            Err(err) => Err(unprefixed_error(&builder, pattern, err)),
        }
    }
}

/// Report a compile error against the caller's pattern, not the prefixed one.
///
/// The raw pattern is recompiled; if it fails at the same spot its error is
/// returned as is. Otherwise (e.g. the raw pattern trips over its duplicate
/// names first) the prefixed error is returned with its offset shifted back.
fn unprefixed_error(builder: &PcreBuilder, pattern: &str, err: pcre2::Error) -> PatternError {
    let Some(offset) = err.offset().and_then(|o| o.checked_sub(DUPNAMES.len())) else {
        return err.into();
    };

    match builder.build(pattern) {
        Err(raw) if raw.offset() == Some(offset) => return raw.into(),
        _ => {}
    }

    let text = err.to_string();
    let message = text.splitn(3, ": ").nth(2).unwrap_or(text.as_str()).to_owned();
    PatternError::Pcre2Compile { offset, message }
}

impl Matcher for PerlMatcher {
    fn find_submatch(&self, text: &str) -> Option<Vec<String>> {
        match self.re.captures(text.as_bytes()) {
            Ok(Some(caps)) => Some(
                (0..caps.len())
                    .map(|i| {
                        caps.get(i).map_or_else(String::new, |m| {
                            String::from_utf8_lossy(m.as_bytes()).into_owned()
                        })
                    })
                    .collect(),
            ),
            Ok(None) => None,
            Err(err) => {
                // Match limits and similar engine failures.
                tracing::warn!(pattern = %self.pattern, error = %err, "pcre2 match failed");
                None
            }
        }
    }

    fn group_names(&self) -> Vec<String> {
        self.re
            .capture_names()
            .iter()
            .map(|name| name.clone().unwrap_or_default())
            .collect()
    }
}

impl Matcher for regex::Regex {
    fn find_submatch(&self, text: &str) -> Option<Vec<String>> {
        self.captures(text).map(|caps| {
            caps.iter()
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_owned()))
                .collect()
        })
    }

    fn group_names(&self) -> Vec<String> {
        self.capture_names()
            .map(|name| name.unwrap_or_default().to_owned())
            .collect()
    }
}
