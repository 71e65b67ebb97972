use serde_json::json;
use verbatim_json::escape::{escape, unescape};
use verbatim_json::{literal, parse, JsonError, Number, Value};

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn escape_short_forms() {
    assert_eq!(escape("a\"b\\c"), r#"a\"b\\c"#);
    assert_eq!(escape("\u{08}\u{0C}\n\r\t"), r"\b\f\n\r\t");
}

#[test]
fn escape_other_controls_as_unicode() {
    assert_eq!(escape("\u{00}\u{1f}"), r"\u0000\u001f");
}

#[test]
fn escape_leaves_slash_and_non_ascii() {
    assert_eq!(escape("a/b é 张三 😀"), "a/b é 张三 😀");
    assert_eq!(escape(""), "");
}

#[test]
fn unescape_every_short_form() {
    assert_eq!(
        unescape(r#"\"\\\/\b\f\n\r\t"#).unwrap(),
        "\"\\/\u{08}\u{0C}\n\r\t"
    );
}

#[test]
fn unescape_unicode_escapes() {
    assert_eq!(unescape(r"\u0041\u00e9\u5f20").unwrap(), "Aé张");
    assert_eq!(unescape(r"\ud83d\ude00").unwrap(), "😀");
}

#[test]
fn unescape_unpaired_surrogates_become_replacement() {
    assert_eq!(unescape(r"\ud83d").unwrap(), "\u{FFFD}");
    assert_eq!(unescape(r"\ud83dx").unwrap(), "\u{FFFD}x");
    assert_eq!(unescape(r"\ude00").unwrap(), "\u{FFFD}");
    assert_eq!(unescape(r"\ud83d\u0041").unwrap(), "\u{FFFD}A");
}

#[test]
fn unescape_unknown_escape_is_the_character() {
    assert_eq!(unescape(r"\q\é").unwrap(), "qé");
}

#[test]
fn unescape_trailing_backslash_is_kept() {
    assert_eq!(unescape("abc\\").unwrap(), "abc\\");
}

#[test]
fn unescape_malformed_unicode_fails() {
    assert!(matches!(unescape(r"\u12"), Err(JsonError::Conversion(_))));
    assert!(matches!(unescape(r"\uzzzz"), Err(JsonError::Conversion(_))));
}

#[test]
fn parsed_malformed_unicode_window_fails_only_on_decode() {
    let value = parse(r#""\uzzzz""#).unwrap();
    assert_eq!(value.as_str().unwrap(), r"\uzzzz");
    assert!(value.decoded().is_err());
    assert!(value.to_serde_json().is_err());
}

// ============================================================================
// To serde_json
// ============================================================================

#[test]
fn to_serde_json_decodes_strings_and_keys() {
    let value = parse(r#"{"k\ty": "a\nb", "list": [1, -2, 0.5, null, true]}"#).unwrap();
    assert_eq!(
        value.to_serde_json().unwrap(),
        json!({"k\ty": "a\nb", "list": [1, -2, 0.5, null, true]})
    );
}

#[test]
fn to_serde_json_converts_raw_numbers() {
    let value = parse("[12, 1.50, 18446744073709551616, -9223372036854775809]").unwrap();
    let converted = value.to_serde_json().unwrap();
    assert_eq!(converted[0], json!(12));
    assert_eq!(converted[1], json!(1.5));
    assert_eq!(converted[2].as_f64(), Some(18446744073709551616.0));
    assert_eq!(converted[3].as_f64(), Some(-9223372036854775808.0));
}

#[test]
fn to_serde_json_raw_integer_text_stays_integer() {
    let value = Value::Number(Number::raw("42"));
    assert_eq!(value.to_serde_json().unwrap(), json!(42));
    let value = Value::Number(Number::raw("-42"));
    assert_eq!(value.to_serde_json().unwrap(), json!(-42));
}

#[test]
fn to_serde_json_rejects_unconvertible_raw_text() {
    let value = Value::Number(Number::raw("abc"));
    assert!(matches!(value.to_serde_json(), Err(JsonError::Conversion(_))));
}

#[test]
fn serialize_through_serde_json_writer() {
    let value = literal![("name", "Alice \"A\""), ("n", 1u64)];
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"n":1,"name":"Alice \"A\""}"#
    );
}

// ============================================================================
// From serde_json
// ============================================================================

#[test]
fn from_serde_json_escapes_strings_and_keys() {
    let value = Value::from(json!({"a\"b": "line\nbreak"}));
    assert_eq!(value.as_object().unwrap().keys().next().unwrap(), r#"a\"b"#);
    assert_eq!(value[r#"a\"b"#].as_str().unwrap(), r"line\nbreak");
}

#[test]
fn from_serde_json_numbers() {
    let value = Value::from(json!([1, -1, 1.5]));
    assert_eq!(value[0], Value::Number(Number::Unsigned(1)));
    assert_eq!(value[1], Value::Number(Number::Signed(-1)));
    assert_eq!(value[2], Value::Number(Number::Float(1.5)));
}

#[test]
fn serde_json_round_trip_of_parsed_document() {
    let text = r#"{"id":[true,2,-3],"name":"café","nested":{"k":null}}"#;
    let ours = parse(text).unwrap();
    let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(ours.to_serde_json().unwrap(), theirs);
}
