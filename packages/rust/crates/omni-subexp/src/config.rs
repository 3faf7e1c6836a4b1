//! Compilation settings.
//!
//! Selects the regex flavor and the engine switches shared by both flavors.

use serde::{Deserialize, Serialize};

/// Regular-expression syntax and match semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Perl-compatible syntax, leftmost-first semantics (PCRE2).
    ///
    /// Group names may repeat.
    #[default]
    Default,
    /// POSIX ERE syntax, leftmost-longest semantics.
    Posix,
}

/// Configuration for pattern compilation.
///
/// Missing fields fall back to [`CompileConfig::default`] when deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Syntax flavor (default: Perl-compatible).
    pub flavor: Flavor,
    /// Case-insensitive matching.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
}

impl CompileConfig {
    /// Config for the given flavor with all switches off.
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            ..Self::default()
        }
    }

    /// Shorthand for `CompileConfig::new(Flavor::Posix)`.
    #[must_use]
    pub fn posix() -> Self {
        Self::new(Flavor::Posix)
    }

    /// Toggle case-insensitive matching.
    #[must_use]
    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Toggle multi-line anchors.
    #[must_use]
    pub fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompileConfig::default();
        assert_eq!(config.flavor, Flavor::Default);
        assert!(!config.case_insensitive);
        assert!(!config.multi_line);
    }

    #[test]
    fn test_builder_helpers() {
        let config = CompileConfig::posix()
            .with_case_insensitive(true)
            .with_multi_line(true);
        assert_eq!(config.flavor, Flavor::Posix);
        assert!(config.case_insensitive);
        assert!(config.multi_line);
    }
}
