//! Error types for capture retrieval and pattern compilation.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for retrieving captured text from a [`crate::MatchCapture`].
///
/// Each variant carries enough context to render a precise diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Positional access outside `[0, len)`.
    #[error("index out of bounds for array with len {len}, index was {index}")]
    IndexOutOfBounds {
        /// Number of positions in the capture (whole match included).
        len: usize,
        /// Requested index.
        index: isize,
    },

    /// The pattern has no capture group with this name.
    #[error("requested named capture group was not found: {name}")]
    NameNotFound {
        /// Requested group name.
        name: String,
    },

    /// The named group exists but did not capture any text.
    #[error("no captured text for name: {name}")]
    NoCapturedText {
        /// Requested group name.
        name: String,
    },
}

/// Error types for pattern compilation.
///
/// Engine errors are passed through unchanged.
#[derive(Error, Debug)]
pub enum PatternError {
    /// PCRE2 rejected the pattern (default flavor).
    #[error(transparent)]
    Pcre2(#[from] pcre2::Error),

    /// PCRE2 rejected the pattern only once duplicate names were enabled.
    ///
    /// `offset` is relative to the pattern as written by the caller.
    #[error("PCRE2: error compiling pattern at offset {offset}: {message}")]
    Pcre2Compile {
        /// Byte offset of the error in the caller's pattern.
        offset: usize,
        /// Engine message.
        message: String,
    },

    /// The `regex` engine rejected the pattern (POSIX flavor).
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// The leftmost-longest engine rejected the pattern (POSIX flavor).
    #[error(transparent)]
    Automata(#[from] regex_automata::meta::BuildError),

    /// The pattern does not parse (POSIX flavor).
    #[error(transparent)]
    Syntax(#[from] regex_syntax::ast::Error),

    /// The pattern uses a construct outside POSIX ERE.
    #[error("{construct} is not allowed in POSIX syntax (at offset {offset})")]
    NotPosix {
        /// Offending construct, e.g. "named group".
        construct: &'static str,
        /// Byte offset of the construct in the pattern.
        offset: usize,
    },
}
