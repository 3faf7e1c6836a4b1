//! Tests for compile-and-capture - flavors, config and invalid patterns.

use omni_subexp::{
    CompileConfig, Flavor, PatternError, capture, compile, compile_and_capture,
    compile_and_capture_posix, compile_and_capture_with, must_compile_and_capture,
    must_compile_and_capture_posix,
};

#[test]
fn test_invalid_pattern_errs() {
    // unbalanced group parenthesis
    let result = compile_and_capture("^(?P<a>[0-9]$", "0");
    assert!(matches!(result, Err(PatternError::Pcre2(_))));
}

#[test]
fn test_invalid_posix_pattern_errs() {
    let result = compile_and_capture_posix("^([0-9]$", "0");
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "invalid pattern")]
fn test_must_compile_panics() {
    let _ = must_compile_and_capture("^(?P<a>[0-9]$", "0");
}

#[test]
#[should_panic(expected = "invalid pattern")]
fn test_must_compile_posix_panics() {
    let _ = must_compile_and_capture_posix("^([0-9]$", "0");
}

#[test]
fn test_python_style_names() {
    let groups = must_compile_and_capture(r"^(?P<a>[0-9]) (?P<a>[0-9]) (?P<b>[0-9])$", "0 1 2")
        .unwrap();
    assert_eq!(groups.all_by_name("a").unwrap(), ["0", "1"]);
    assert_eq!(groups.first_by_name("b").unwrap(), "2");
}

#[test]
fn test_posix_leftmost_longest() {
    let groups = compile_and_capture_posix("(a|ab)(c|bcd)", "abcd").unwrap().unwrap();
    assert_eq!(groups.whole(), "abcd");

    let perl = compile_and_capture("(a|ab)", "ab").unwrap().unwrap();
    let posix = compile_and_capture_posix("(a|ab)", "ab").unwrap().unwrap();
    assert_eq!(perl.whole(), "a");
    assert_eq!(posix.whole(), "ab");
}

#[test]
fn test_posix_rejects_named_groups() {
    let result = compile_and_capture_posix("(?P<a>[0-9])", "0");
    assert!(matches!(
        result,
        Err(PatternError::NotPosix { construct: "named group", offset: 0 })
    ));
}

#[test]
fn test_posix_no_match() {
    assert!(compile_and_capture_posix("^[0-9]+$", "abc").unwrap().is_none());
}

#[test]
fn test_case_insensitive_config() {
    let config = CompileConfig::default().with_case_insensitive(true);
    let groups = compile_and_capture_with("(?<w>hello)", "HeLLo", &config)
        .unwrap()
        .unwrap();
    assert_eq!(groups.first_by_name("w").unwrap(), "HeLLo");

    assert!(compile_and_capture("(?<w>hello)", "HeLLo").unwrap().is_none());
}

#[test]
fn test_config_from_json() {
    let config: CompileConfig = serde_json::from_str(r#"{"flavor": "posix"}"#).unwrap();
    assert_eq!(config, CompileConfig::posix());

    let config: CompileConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.flavor, Flavor::Default);
}

#[test]
fn test_reuse_compiled_matcher() {
    let matcher = compile(r"(?<key>\w+)=(?<value>\w*)", &CompileConfig::default()).unwrap();

    let first = capture(matcher.as_ref(), "a=1").unwrap();
    assert_eq!(first.first_by_name("value").unwrap(), "1");

    let second = capture(matcher.as_ref(), "b=").unwrap();
    assert_eq!(second.first_by_name("key").unwrap(), "b");
    assert_eq!(second.all_by_name("value").unwrap(), [""]);
}

#[test]
fn test_capture_with_regex_crate() {
    let re = regex::Regex::new(r"(?P<year>\d{4})-(?P<month>\d{2})").unwrap();
    let groups = capture(&re, "on 2024-06").unwrap();
    assert_eq!(groups.first_by_name("year").unwrap(), "2024");
    assert_eq!(groups.by_index(2).unwrap(), "06");
}

#[test]
fn test_compile_error_offset_in_caller_pattern() {
    // unmatched closing parenthesis at offset 2
    let err = compile_and_capture("ab)", "x").unwrap_err();
    match err {
        PatternError::Pcre2(ref err) => assert_eq!(err.offset(), Some(2)),
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("offset 2"));
}

#[test]
fn test_posix_rejects_bracketed_perl_class() {
    let result = compile_and_capture_posix(r"[\d]+", "a12");
    assert!(matches!(
        result,
        Err(PatternError::NotPosix { construct: "Perl character class", .. })
    ));
    assert!(compile_and_capture_posix("[[:digit:]]+", "a12").unwrap().is_some());
}
