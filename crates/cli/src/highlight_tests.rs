// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::pattern::{Limits, PatternRequest, evaluate_request};
use proptest::prelude::*;
use similar_asserts::assert_eq;
use termcolor::Color;

/// Build a match over `text[start..end]` the way the evaluator would.
fn span(text: &str, start: usize, end: usize) -> Match {
    Match {
        text: text[start..end].to_string(),
        index: start,
        char_index: text[..start].chars().count(),
        groups: Vec::new(),
    }
}

fn evaluated(pattern: &str, text: &str, flags: &str) -> Vec<Match> {
    evaluate_request(&PatternRequest::new(pattern, text, flags), &Limits::default()).matches
}

#[test]
fn zero_matches_returns_text_unchanged() {
    assert_eq!(compose("hello world", &[], "<", ">"), "hello world");
}

#[test]
fn wraps_each_match() {
    let text = "12 345 6";
    let matches = evaluated(r"\d+", text, "g");
    assert_eq!(compose(text, &matches, "<", ">"), "<12> <345> <6>");
}

#[test]
fn input_order_does_not_matter() {
    let text = "ab cd ef";
    let forward = vec![span(text, 0, 2), span(text, 3, 5), span(text, 6, 8)];
    let mut shuffled = forward.clone();
    shuffled.swap(0, 2);
    assert_eq!(
        compose(text, &forward, "[", "]"),
        compose(text, &shuffled, "[", "]")
    );
}

#[test]
fn zero_length_matches_insert_empty_markers() {
    let text = "abc";
    let matches = evaluated("x*", text, "g");
    assert_eq!(compose(text, &matches, "<", ">"), "<>a<>b<>c<>");
}

#[test]
fn empty_match_right_after_match_is_kept() {
    let text = "12 3";
    let matches = evaluated(r"\d*", text, "g");
    assert_eq!(compose(text, &matches, "<", ">"), "<12><> <3><>");
}

#[test]
fn overlapping_spans_lower_index_wins_overlap() {
    // [0,3) is processed last and keeps "abc"; [2,5) keeps only "de".
    let text = "abcde";
    let matches = vec![span(text, 0, 3), span(text, 2, 5)];
    let rendered = compose(text, &matches, "<", ">");
    assert_eq!(rendered, "<abc><de>");
    assert_eq!(strip_markers(&rendered, "<", ">"), text);
}

#[test]
fn nested_span_is_absorbed() {
    let text = "abcde";
    let matches = vec![span(text, 0, 5), span(text, 1, 3)];
    assert_eq!(compose(text, &matches, "<", ">"), "<abcde>");
}

#[test]
fn same_start_shorter_span_wins() {
    let text = "abcd";
    let matches = vec![span(text, 0, 3), span(text, 0, 1)];
    assert_eq!(compose(text, &matches, "<", ">"), "<a><bc>d");
}

#[test]
fn duplicate_spans_are_marked_once() {
    let text = "abc";
    let matches = vec![span(text, 1, 2), span(text, 1, 2)];
    assert_eq!(compose(text, &matches, "<", ">"), "a<b>c");
}

#[test]
fn out_of_range_spans_are_clamped() {
    let text = "abc";
    let matches = vec![Match {
        text: "bcdef".to_string(),
        index: 1,
        char_index: 1,
        groups: Vec::new(),
    }];
    assert_eq!(compose(text, &matches, "<", ">"), "a<bc>");
}

#[test]
fn spans_inside_a_character_snap_to_its_start() {
    let text = "aéb";
    let matches = vec![Match {
        text: "x".to_string(),
        index: 2,
        char_index: 2,
        groups: Vec::new(),
    }];
    let rendered = compose(text, &matches, "<", ">");
    assert_eq!(strip_markers(&rendered, "<", ">"), text);
}

#[test]
fn matched_text_is_not_escaped() {
    let text = "a<b>c";
    let matches = evaluated("<b>", text, "g");
    assert_eq!(
        compose(text, &matches, "<mark>", "</mark>"),
        "a<mark><b></mark>c"
    );
}

#[test]
fn compose_with_uses_delimiters() {
    let text = "foo bar";
    let matches = evaluated("bar", text, "g");
    assert_eq!(
        compose_with(text, &matches, &Delimiters::default()),
        "foo <mark>bar</mark>"
    );
}

#[test]
fn ansi_delimiters_wrap_with_escape_sequences() {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Magenta)).set_bold(true);
    let delimiters = Delimiters::ansi(&spec);
    assert!(delimiters.open.starts_with('\x1b'));
    assert!(delimiters.open.contains("35"));
    assert_eq!(delimiters.close, "\x1b[0m");
}

#[test]
fn strip_markers_removes_only_markers() {
    assert_eq!(strip_markers("<a> b <c>", "<", ">"), "a b c");
    assert_eq!(strip_markers("abc", "", ""), "abc");
}

#[test]
fn resolve_spans_are_ascending_and_disjoint() {
    let text = "abcdefgh";
    let matches = vec![
        span(text, 5, 8),
        span(text, 0, 4),
        span(text, 2, 6),
        span(text, 6, 6),
    ];
    let spans = resolve_spans(text, &matches);
    assert_eq!(
        spans,
        vec![
            HighlightSpan { start: 0, end: 4 },
            HighlightSpan { start: 4, end: 6 },
            HighlightSpan { start: 6, end: 8 },
        ]
    );
}

proptest! {
    #[test]
    fn evaluator_output_round_trips(text in "[a-c1-3 ]{0,40}", pattern in prop::sample::select(vec![
        r"\d+", r"\d*", "a*", "(a)|(b)", "b|c", "ab", r"\b", r"\w+",
    ])) {
        let matches = evaluated(pattern, &text, "g");
        let rendered = compose(&text, &matches, "<", ">");
        prop_assert_eq!(strip_markers(&rendered, "<", ">"), text);
    }

    #[test]
    fn arbitrary_spans_round_trip(
        text in "[a-zé ]{0,20}",
        raw in prop::collection::vec((0usize..30, 0usize..10), 0..8),
    ) {
        let matches: Vec<Match> = raw
            .into_iter()
            .map(|(index, len)| Match {
                text: "x".repeat(len),
                index,
                char_index: 0,
                groups: Vec::new(),
            })
            .collect();
        let rendered = compose(&text, &matches, "<", ">");
        prop_assert_eq!(strip_markers(&rendered, "<", ">"), text);
    }
}
