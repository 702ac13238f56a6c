// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for directive parsing.

use super::*;
use crate::error::ErrorKind;

#[test]
fn empty_directive_is_empty_command() {
    let cmd = Command::parse("").unwrap();
    assert!(cmd.is_empty());
    assert_eq!(cmd.value(), "");
    assert_eq!(cmd.primary(), None);
}

#[test]
fn bare_text_is_literal() {
    for raw in ["true", "abc", "123", "1+2i", "3s", "2024-12-09T02:20:35Z"] {
        let cmd = Command::parse(raw).unwrap();
        assert!(cmd.is_literal(), "{raw} should be literal");
        assert_eq!(cmd.value(), raw);
        assert_eq!(cmd.primary(), None);
    }
}

#[test]
fn struct_literal() {
    let cmd = Command::parse("struct").unwrap();
    assert!(cmd.is_literal());
    assert!(cmd.is_struct());

    let cmd = Command::parse("value(struct)").unwrap();
    assert!(!cmd.is_literal());
    assert!(cmd.is_struct());

    assert!(Command::parse("value(Struct)").unwrap().is_struct());
    assert!(!Command::parse("value(structure)").unwrap().is_struct());
}

#[test]
fn json_object_literal_is_not_clauses() {
    let raw = r#"{"key": "value"}"#;
    let cmd = Command::parse(raw).unwrap();
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), raw);
}

#[test]
fn map_pairs_literal() {
    let cmd = Command::parse("key1:1,key2:2").unwrap();
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), "key1:1,key2:2");
}

#[test]
fn unknown_keyword_alone_is_literal() {
    let cmd = Command::parse("hello(world)").unwrap();
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), "hello(world)");

    let cmd = Command::parse("hello(value(1))").unwrap();
    assert!(cmd.is_literal());
}

#[test]
fn unknown_clauses_are_skipped() {
    let cmd = Command::parse("len(2),size(3)").unwrap();
    assert!(!cmd.is_literal());
    assert_eq!(cmd.len(), 2);
    assert_eq!(cmd.to_string(), "len(2)");

    let cmd = Command::parse("foo(1),value(2)").unwrap();
    assert_eq!(cmd.primary(), Some(Keyword::Value));
    assert_eq!(cmd.value(), "2");
}

#[test]
fn clauses_need_no_comma() {
    let cmd = Command::parse("value(x) len(3)").unwrap();
    assert_eq!(cmd.value(), "x");
    assert_eq!(cmd.len(), 3);
}

#[test]
fn quoted_text_outside_clauses_is_not_scanned() {
    let raw = r#"{"note": "len(3)", "value": "json([1])"}"#;
    let cmd = Command::parse(raw).unwrap();
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), raw);
}

#[test]
fn chan_inside_text_is_not_a_clause() {
    assert!(Command::parse("channel").unwrap().is_literal());
    assert!(Command::parse("chan:1").unwrap().is_literal());
    assert_eq!(
        Command::parse("len(2), chan").unwrap().primary(),
        Some(Keyword::Chan)
    );
}

#[test]
fn value_clause() {
    let cmd = Command::parse("value(5h30m15s)").unwrap();
    assert_eq!(cmd.primary(), Some(Keyword::Value));
    assert_eq!(cmd.value(), "5h30m15s");
    assert_eq!(cmd.raw(), "value(5h30m15s)");
}

#[test]
fn value_with_layout() {
    let cmd = Command::parse("value(2024-12-09 02:20:35),layout(DateTime)").unwrap();
    assert_eq!(cmd.value(), "2024-12-09 02:20:35");
    assert_eq!(cmd.layout(), "DateTime");
}

#[test]
fn layout_defaults_to_rfc3339() {
    let cmd = Command::parse("2024-12-09T02:20:35Z").unwrap();
    assert_eq!(cmd.layout(), DEFAULT_LAYOUT);
    assert_eq!(DEFAULT_LAYOUT, "RFC3339");
}

#[test]
fn json_array_argument_is_balanced() {
    let cmd = Command::parse(r#"json(["1", "2", "3", "4"])"#).unwrap();
    assert_eq!(cmd.primary(), Some(Keyword::Json));
    assert_eq!(cmd.value(), r#"["1", "2", "3", "4"]"#);
}

#[test]
fn json_nested_arrays() {
    let cmd = Command::parse(r#"json([["1", "2"], ["3", "4"]])"#).unwrap();
    assert_eq!(cmd.value(), r#"[["1", "2"], ["3", "4"]]"#);
}

#[test]
fn json_parentheses_inside_strings() {
    let cmd = Command::parse(r#"json(["(a", "b)", "c\")"])"#).unwrap();
    assert_eq!(cmd.value(), r#"["(a", "b)", "c\")"]"#);
}

#[test]
fn json_object_argument() {
    let cmd = Command::parse(r#"json({"key": {"nested": [1, 2]}})"#).unwrap();
    assert_eq!(cmd.value(), r#"{"key": {"nested": [1, 2]}}"#);
}

#[test]
fn mismatched_brackets_make_literal() {
    let cmd = Command::parse("json([1, 2)").unwrap();
    assert!(cmd.is_literal());
}

#[test]
fn len_cap_repeat() {
    let cmd = Command::parse("len(5),cap(10),repeat(1)").unwrap();
    assert_eq!(cmd.len(), 5);
    assert_eq!(cmd.cap(), 10);
    assert_eq!(cmd.primary(), Some(Keyword::Repeat));
    assert_eq!(cmd.value(), "1");
}

#[test]
fn cap_clamped_to_len() {
    let cmd = Command::parse("len(5),cap(2)").unwrap();
    assert_eq!(cmd.cap(), 5);

    let cmd = Command::parse("len(3)").unwrap();
    assert_eq!(cmd.cap(), 3);
}

#[test]
fn non_numeric_len_reads_as_zero() {
    let cmd = Command::parse("len(many),repeat(x)").unwrap();
    assert_eq!(cmd.len(), 0);
    assert_eq!(cmd.cap(), 0);
}

#[test]
fn structured_without_primary_has_empty_value() {
    let cmd = Command::parse("len(3)").unwrap();
    assert!(!cmd.is_literal());
    assert_eq!(cmd.primary(), None);
    assert_eq!(cmd.value(), "");
}

#[test]
fn whitespace_between_clauses() {
    let cmd = Command::parse("  len(2) ,  repeat(x)  ").unwrap();
    assert_eq!(cmd.len(), 2);
    assert_eq!(cmd.value(), "x");
}

#[test]
fn bare_chan() {
    let cmd = Command::parse("chan").unwrap();
    assert_eq!(cmd.primary(), Some(Keyword::Chan));
    assert_eq!(cmd.number(Keyword::Chan), 0);

    let cmd = Command::parse("chan(5)").unwrap();
    assert_eq!(cmd.number(Keyword::Chan), 5);
}

#[test]
fn bare_value_keyword_is_literal() {
    let cmd = Command::parse("value").unwrap();
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), "value");
}

#[test]
fn rune_and_byte_clauses() {
    assert_eq!(
        Command::parse("rune(abc)").unwrap().primary(),
        Some(Keyword::Rune)
    );
    assert_eq!(
        Command::parse("byte(a)").unwrap().primary(),
        Some(Keyword::Byte)
    );
}

#[test]
fn two_primaries_are_malformed() {
    let err = Command::parse("value(a),json([1])").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDirective);
    assert!(err.to_string().contains("value"));
    assert!(err.to_string().contains("json"));
}

#[test]
fn space_separated_primaries_are_malformed() {
    let err = Command::parse("value(a) json([1])").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDirective);
}

#[test]
fn primaries_after_unknown_clause_are_malformed() {
    let err = Command::parse("foo(1),value(a),json([1])").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDirective);
}

#[test]
fn repeated_keyword_is_malformed() {
    let err = Command::parse("len(1),len(2)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDirective);

    let err = Command::parse("value(a),value(b)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDirective);
}

#[test]
fn every_primary_pair_conflicts() {
    let primaries: Vec<Keyword> = Keyword::ALL
        .into_iter()
        .filter(Keyword::is_primary)
        .collect();
    assert_eq!(primaries.len(), 6);

    for first in &primaries {
        for second in primaries.iter().filter(|k| *k != first) {
            let raw = format!("{first}(1),{second}(2)");
            let err = Command::parse(&raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDirective, "{raw}");
        }
    }
}

#[test]
fn display_is_canonical() {
    let cmd = Command::parse("repeat(1), cap(10), len(5)").unwrap();
    assert_eq!(cmd.to_string(), "repeat(1),len(5),cap(10)");

    let cmd = Command::parse("abc").unwrap();
    assert_eq!(cmd.to_string(), "abc");
}

#[test]
fn literal_constructor() {
    let cmd = Command::literal("value(x)");
    assert!(cmd.is_literal());
    assert_eq!(cmd.value(), "value(x)");
}

#[test]
fn keyword_names_round_trip() {
    for keyword in Keyword::ALL {
        assert_eq!(Keyword::from_name(keyword.as_str()), Some(keyword));
    }
    assert_eq!(Keyword::from_name("Value"), None);
}
