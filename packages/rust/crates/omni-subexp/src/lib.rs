#![allow(clippy::doc_markdown)]

//! omni-subexp - Named Capture Group Retrieval for Omni DevEnv
//!
//! A thin layer over regex engines that makes sub-expressions ("named
//! capture groups") easy to pull out of a match by name or by position.
//!
//! # Features
//!
//! - **Repeated Names**: `(?<a>..) (?<a>..)` keeps both captures, in order
//! - **Typed Errors**: out-of-range index, unknown name and empty capture
//!   are distinct `CaptureError` variants
//! - **Two Flavors**: Perl-compatible (PCRE2) and POSIX leftmost-longest
//! - **No-match as `None`**: a failed match is not an error
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-subexp/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # CaptureError + PatternError enums (thiserror)
//! ├── config.rs   # Flavor, CompileConfig
//! ├── matcher.rs  # Matcher trait, PCRE2 + regex adapters, compile()
//! ├── posix.rs    # POSIX syntax gate + leftmost-longest matcher
//! ├── groups.rs   # MatchCapture lookups
//! └── capture.rs  # capture / compile_and_capture entry points
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_subexp::{compile_and_capture, CaptureError};
//!
//! let pattern = r"^(?<a>[0-9]) (?<a>[0-9]) (?<b>[0-9])(?: (?<c>[0-9]))?$";
//! let groups = compile_and_capture(pattern, "0 1 2")?.expect("matches");
//!
//! assert_eq!(groups.all_by_name("a")?, ["0", "1"]);
//! assert_eq!(groups.first_by_name("b")?, "2");
//! assert!(matches!(
//!     groups.first_by_name("c"),
//!     Err(CaptureError::NoCapturedText { .. })
//! ));
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod capture;
mod config;
mod error;
mod groups;
mod matcher;
mod posix;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use capture::{
    capture, compile_and_capture, compile_and_capture_posix, compile_and_capture_with,
    must_compile_and_capture, must_compile_and_capture_posix, must_compile_and_capture_with,
};
pub use config::{CompileConfig, Flavor};
pub use error::{CaptureError, PatternError};
pub use groups::MatchCapture;
pub use matcher::{Matcher, PerlMatcher, compile};
pub use posix::PosixMatcher;
