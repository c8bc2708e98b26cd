#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn parses(text: &str) -> serde_json::Value {
    serde_json::from_str(&relax(text)).unwrap()
}

#[test]
fn relax___strict_json___is_unchanged() {
    let text = r#"{"consts": [{"constname": "A", "constval": "1"}]}"#;

    assert_eq!(relax(text), text);
}

#[test_case(r#"{"a": 1, // trailing note
}"#; "line comment then trailing comma")]
#[test_case(r#"{"a": /* inline */ 1}"#; "block comment")]
#[test_case(r#"{"a": [1, 2, 3,]}"#; "trailing comma in array")]
#[test_case(r#"{"a": 1,}"#; "trailing comma in object")]
#[test_case("{\"a\": 1 /* spans\nlines */}"; "multi line block comment")]
fn relax___permissive_input___parses(text: &str) {
    let value = parses(text);

    assert_eq!(value["a"].as_i64().or(value["a"][0].as_i64()), Some(1));
}

#[test]
fn relax___comment_markers_inside_strings___are_kept() {
    let value = parses(r#"{"type": "void (*)(int, /* x */ char) // y",}"#);

    assert_eq!(value["type"], "void (*)(int, /* x */ char) // y");
}

#[test]
fn relax___escaped_quote_in_string___does_not_end_string() {
    let value = parses(r#"{"v": "say \"hi\", // ok",}"#);

    assert_eq!(value["v"], "say \"hi\", // ok");
}

#[test]
fn relax___comma_before_closer_inside_string___is_kept() {
    let value = parses(r#"{"v": "a, ]"}"#);

    assert_eq!(value["v"], "a, ]");
}

#[test]
fn relax___block_comment___preserves_line_count() {
    let text = "{\n/* one\ntwo\nthree */\n\"a\": 1\n}";

    let relaxed = relax(text);

    assert_eq!(relaxed.lines().count(), text.lines().count());
}

#[test]
fn relax___malformed_input___still_fails_to_parse() {
    let relaxed = relax(r#"{"a": }"#);

    assert!(serde_json::from_str::<serde_json::Value>(&relaxed).is_err());
}
