//! Match-and-capture entry points.
//!
//! `capture` works with any compiled [`Matcher`]; the `compile_and_capture`
//! family compiles the pattern first. The `must_*` variants panic on an
//! invalid pattern instead of returning the error.

use crate::config::CompileConfig;
use crate::error::PatternError;
use crate::groups::MatchCapture;
use crate::matcher::{Matcher, compile};

/// Run `matcher` against `text` and collect its sub-expressions.
///
/// Returns `None` when the text does not match. A match with no capture
/// groups still yields a [`MatchCapture`] holding the whole match.
pub fn capture<M: Matcher + ?Sized>(matcher: &M, text: &str) -> Option<MatchCapture> {
    let Some(positional) = matcher.find_submatch(text).filter(|s| !s.is_empty()) else {
        tracing::debug!(text_len = text.len(), "no match");
        return None;
    };

    let groups = MatchCapture::from_parts(positional, &matcher.group_names());
    tracing::debug!(
        groups = groups.len(),
        named = groups.names().count(),
        "captured sub-expressions"
    );
    Some(groups)
}

/// Compile `pattern` as described by `config`, then [`capture`] on `text`.
///
/// `Ok(None)` means the pattern compiled but did not match.
///
/// # Errors
/// Returns the engine's [`PatternError`] when the pattern does not compile.
pub fn compile_and_capture_with(
    pattern: &str,
    text: &str,
    config: &CompileConfig,
) -> Result<Option<MatchCapture>, PatternError> {
    let matcher = compile(pattern, config)?;
    Ok(capture(matcher.as_ref(), text))
}

/// Compile `pattern` with the default (Perl-compatible) flavor and capture.
///
/// # Errors
/// Returns [`PatternError::Pcre2`] when the pattern does not compile.
pub fn compile_and_capture(
    pattern: &str,
    text: &str,
) -> Result<Option<MatchCapture>, PatternError> {
    compile_and_capture_with(pattern, text, &CompileConfig::default())
}

/// Same as [`compile_and_capture`] with POSIX syntax and leftmost-longest
/// matching.
///
/// # Errors
/// Returns a [`PatternError`] when the pattern is not valid POSIX ERE.
pub fn compile_and_capture_posix(
    pattern: &str,
    text: &str,
) -> Result<Option<MatchCapture>, PatternError> {
    compile_and_capture_with(pattern, text, &CompileConfig::posix())
}

/// Like [`compile_and_capture_with`], for patterns known to be valid.
///
/// # Panics
/// Panics if the pattern does not compile.
#[must_use]
pub fn must_compile_and_capture_with(
    pattern: &str,
    text: &str,
    config: &CompileConfig,
) -> Option<MatchCapture> {
    match compile_and_capture_with(pattern, text, config) {
        Ok(groups) => groups,
        Err(err) => panic!("invalid pattern {pattern:?}: {err}"),
    }
}

/// Like [`compile_and_capture`] but panics on an invalid pattern.
///
/// # Panics
/// Panics if the pattern does not compile.
#[must_use]
pub fn must_compile_and_capture(pattern: &str, text: &str) -> Option<MatchCapture> {
    must_compile_and_capture_with(pattern, text, &CompileConfig::default())
}

/// Like [`compile_and_capture_posix`] but panics on an invalid pattern.
///
/// # Panics
/// Panics if the pattern is not valid POSIX ERE.
#[must_use]
pub fn must_compile_and_capture_posix(pattern: &str, text: &str) -> Option<MatchCapture> {
    must_compile_and_capture_with(pattern, text, &CompileConfig::posix())
}
