//! POSIX flavor: ERE syntax gate and leftmost-longest matching.
//!
//! The `regex` engine is leftmost-first. The leftmost start is the same
//! under both semantics, so it is located with a plain `regex::Regex` and
//! the longest match from that start comes from an anchored search with
//! `MatchKind::All`.

use regex_automata::util::syntax;
use regex_automata::{Anchored, Input, MatchKind, meta};
use regex_syntax::ast::parse::Parser;
use regex_syntax::ast::{Assertion, AssertionKind, Ast, ClassSet, ClassSetItem, GroupKind, Span};

use crate::config::CompileConfig;
use crate::error::PatternError;
use crate::matcher::Matcher;

/// POSIX ERE matcher with leftmost-longest semantics.
///
/// Named groups do not exist in this flavor, so every group is unnamed.
#[derive(Debug, Clone)]
pub struct PosixMatcher {
    leftmost: regex::Regex,
    longest: meta::Regex,
}

impl PosixMatcher {
    /// Check `pattern` against the POSIX subset and compile it.
    ///
    /// # Errors
    /// Returns [`PatternError::Syntax`] or [`PatternError::NotPosix`] for
    /// patterns outside POSIX ERE, and the engine error otherwise.
    pub fn new(pattern: &str, config: &CompileConfig) -> Result<Self, PatternError> {
        check_posix(pattern)?;

        let leftmost = regex::RegexBuilder::new(pattern)
            .case_insensitive(config.case_insensitive)
            .multi_line(config.multi_line)
            .build()?;
        let longest = meta::Regex::builder()
            .syntax(
                syntax::Config::new()
                    .case_insensitive(config.case_insensitive)
                    .multi_line(config.multi_line),
            )
            .configure(meta::Regex::config().match_kind(MatchKind::All))
            .build(pattern)?;

        Ok(Self { leftmost, longest })
    }
}

impl Matcher for PosixMatcher {
    fn find_submatch(&self, text: &str) -> Option<Vec<String>> {
        let start = self.leftmost.find(text)?.start();

        let input = Input::new(text).range(start..).anchored(Anchored::Yes);
        let mut caps = self.longest.create_captures();
        self.longest.search_captures(&input, &mut caps);
        if !caps.is_match() {
            return None;
        }

        Some(
            (0..caps.group_len())
                .map(|i| {
                    caps.get_group(i)
                        .map_or_else(String::new, |span| text[span.range()].to_owned())
                })
                .collect(),
        )
    }

    fn group_names(&self) -> Vec<String> {
        vec![String::new(); self.leftmost.captures_len()]
    }
}

/// Reject constructs that POSIX ERE does not have.
fn check_posix(pattern: &str) -> Result<(), PatternError> {
    let ast = Parser::new().parse(pattern)?;
    check_ast(&ast)
}

fn check_ast(ast: &Ast) -> Result<(), PatternError> {
    match ast {
        Ast::Flags(flags) => Err(not_posix("inline flags", &flags.span)),
        Ast::ClassPerl(class) => Err(not_posix("Perl character class", &class.span)),
        Ast::ClassUnicode(class) => Err(not_posix("Unicode character class", &class.span)),
        Ast::ClassBracketed(class) => check_class_set(&class.kind),
        Ast::Assertion(assertion) if !is_line_anchor(assertion) => {
            Err(not_posix("Perl assertion", &assertion.span))
        }
        Ast::Repetition(rep) if !rep.greedy => Err(not_posix("lazy repetition", &rep.span)),
        Ast::Repetition(rep) => check_ast(&rep.ast),
        Ast::Group(group) => match group.kind {
            GroupKind::CaptureIndex(_) => check_ast(&group.ast),
            GroupKind::CaptureName { .. } => Err(not_posix("named group", &group.span)),
            GroupKind::NonCapturing(_) => Err(not_posix("non-capturing group", &group.span)),
        },
        Ast::Alternation(alt) => alt.asts.iter().try_for_each(check_ast),
        Ast::Concat(concat) => concat.asts.iter().try_for_each(check_ast),
        _ => Ok(()),
    }
}

fn check_class_set(set: &ClassSet) -> Result<(), PatternError> {
    match set {
        ClassSet::Item(item) => check_class_item(item),
        // `&&`, `--` and `~~` are plain characters in a POSIX bracket.
        ClassSet::BinaryOp(op) => Err(not_posix("class set operation", &op.span)),
    }
}

fn check_class_item(item: &ClassSetItem) -> Result<(), PatternError> {
    match item {
        ClassSetItem::Perl(class) => Err(not_posix("Perl character class", &class.span)),
        ClassSetItem::Unicode(class) => Err(not_posix("Unicode character class", &class.span)),
        ClassSetItem::Bracketed(class) => check_class_set(&class.kind),
        ClassSetItem::Union(union) => union.items.iter().try_for_each(check_class_item),
        _ => Ok(()),
    }
}

fn is_line_anchor(assertion: &Assertion) -> bool {
    matches!(
        assertion.kind,
        AssertionKind::StartLine | AssertionKind::EndLine
    )
}

fn not_posix(construct: &'static str, span: &Span) -> PatternError {
    PatternError::NotPosix {
        construct,
        offset: span.start.offset,
    }
}
