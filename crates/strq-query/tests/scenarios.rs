//! End-to-end query scenarios through the public API.

// Integration tests live in tests/, outside any cfg(test) module
#![allow(clippy::tests_outside_test_module)]

use strq_query::{QueryErrorKind, QueryTool, Separators, parse};

/// Haystacks used to compare the behaviour of two queries.
const HAYSTACKS: &[&str] = &[
    "",
    "this",
    "that",
    "this and that",
    "THAT OTHER",
    "foo",
    "eggs",
    "foo and eggs",
    "bar spam",
    "a b c",
    "c only",
    "a and b",
];

fn tool(query: &str) -> QueryTool {
    QueryTool::with_default_separators(query).unwrap()
}

#[test]
fn both_terms_present() {
    assert!(tool("this & that").matches("here is this and that"));
}

#[test]
fn one_alternative_present() {
    assert!(tool("this, that").matches("only this present"));
}

#[test]
fn groups_each_satisfied() {
    assert!(tool("(foo,bar)&(spam,eggs)").matches("foo and eggs"));
}

#[test]
fn second_group_unsatisfied() {
    assert!(!tool("(foo,bar)&(spam,eggs)").matches("foo only"));
}

#[test]
fn bracket_glued_to_text() {
    let err = QueryTool::with_default_separators("x(foo,bar)").unwrap_err();
    assert!(err.is_invalid_query());
    assert!(matches!(err.kind, QueryErrorKind::UnseparatedBracket { .. }));
}

#[test]
fn nested_brackets_rejected() {
    let err = QueryTool::with_default_separators("(a,(b&c))").unwrap_err();
    assert!(err.is_invalid_query());
    assert!(matches!(err.kind, QueryErrorKind::NestedBracket { .. }));
}

#[test]
fn reserved_or_separator() {
    let err = QueryTool::with_separators("a, b", "{", "&").unwrap_err();
    assert!(err.is_illegal_character());
}

#[test]
fn case_insensitive_either_side() {
    for (query, haystack) in [("this & that", "THIS AND THAT"), ("FOO, bar", "foo")] {
        let t = tool(query);
        assert_eq!(t.matches(haystack), t.matches(&haystack.to_lowercase()));
        assert_eq!(t.matches(haystack), t.matches(&haystack.to_uppercase()));
        assert!(t.matches(haystack));

        let upper = tool(&query.to_uppercase());
        assert_eq!(upper.matches(haystack), t.matches(haystack));
    }
}

#[test]
fn missing_and_term_fails_whole_clause() {
    let t = tool("a & b & zzz");
    assert!(!t.matches("a b c"));
}

#[test]
fn present_or_term_passes_whole_clause() {
    let t = tool("zzz, yyy, c");
    assert!(t.matches("a b c"));
}

#[test]
fn group_behaves_like_literal() {
    // A single-term group in place of a literal changes nothing.
    for haystack in HAYSTACKS {
        assert_eq!(
            tool("(this) & that").matches(haystack),
            tool("this & that").matches(haystack),
            "{haystack:?}"
        );
        assert_eq!(
            tool("(this), that").matches(haystack),
            tool("this, that").matches(haystack),
            "{haystack:?}"
        );
    }
}

#[test]
fn statement_round_trip_is_semantic() {
    let words = Separators::new(" or ", " and ").unwrap();
    for query in ["this & that", "this, that", "foo", "a, b, c", "a & b & c"] {
        let original = tool(query);
        let statement = original.render();
        let reparsed = parse(&statement, &words).unwrap();
        for haystack in HAYSTACKS {
            assert_eq!(
                reparsed.matches(haystack),
                original.matches(haystack),
                "{query:?} rendered as {statement:?}, haystack {haystack:?}"
            );
        }
    }
}

#[test]
fn mixed_statement_needs_query_string() {
    let words = Separators::new(" or ", " and ").unwrap();
    let original = tool("a, b & c");
    assert_eq!(original.render(), "(a or (b and c))");

    let err = parse(&original.render(), &words).unwrap_err();
    assert!(matches!(err.kind, QueryErrorKind::NestedBracket { .. }));

    let rendered = original.query().to_query_string(&words);
    assert_eq!(rendered, "a or b and c");
    let reparsed = parse(&rendered, &words).unwrap();
    for haystack in HAYSTACKS {
        assert_eq!(reparsed.matches(haystack), original.matches(haystack), "{haystack:?}");
    }
}

#[test]
fn space_before_group_rejected() {
    let err = QueryTool::with_default_separators("a & (b, c)").unwrap_err();
    assert!(err.is_invalid_query());
    assert!(matches!(err.kind, QueryErrorKind::UnseparatedBracket { position: 4 }));
}

#[test]
fn query_string_round_trip_is_semantic() {
    let seps = Separators::default();
    for query in [
        "a, b & c",
        "(foo,bar)&(spam,eggs)",
        "this &(that, other), foo",
        "a, &",
        "(a & b), c",
    ] {
        let original = parse(query, &seps).unwrap();
        let reparsed = parse(&original.to_query_string(&seps), &seps).unwrap();
        for haystack in HAYSTACKS {
            assert_eq!(reparsed.matches(haystack), original.matches(haystack));
        }
    }
}

#[test]
fn reassignment_replaces_query() {
    let mut t = tool("foo");
    assert!(t.matches("foo"));
    t.set_query_string("spam & eggs").unwrap();
    assert!(!t.matches("foo"));
    assert!(t.matches("eggs and spam"));
    assert_eq!(t.render(), "(spam and eggs)");
}
