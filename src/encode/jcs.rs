//! Canonical JSON rendering of circuit input (RFC 8785 style).
//!
//! Object keys are emitted in UTF-16 code unit order and no whitespace is
//! produced, so equal inputs always render to identical bytes.

use std::cmp::Ordering;

use super::value::InputValue;

/// Compare two strings using UTF-16 code unit ordering.
pub fn compare_keys_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Render an [`InputValue`] as canonical JSON.
pub fn canonicalize(value: &InputValue) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

fn write_value(value: &InputValue, output: &mut String) {
    match value {
        InputValue::Bool(true) => output.push_str("true"),
        InputValue::Bool(false) => output.push_str("false"),
        InputValue::Number(n) => output.push_str(&n.to_string()),
        InputValue::String(s) => write_string(s, output),
        InputValue::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(item, output);
            }
            output.push(']');
        }
        InputValue::Object(map) => {
            output.push('{');
            let mut entries: Vec<(&String, &InputValue)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys_utf16(a, b));
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_string(key, output);
                output.push(':');
                write_value(item, output);
            }
            output.push('}');
        }
    }
}

fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => output.push_str(&format!("\\u{:04x}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_utf16_key_ordering() {
        assert_eq!(compare_keys_utf16("a", "b"), Ordering::Less);
        assert_eq!(compare_keys_utf16("abc", "abc"), Ordering::Equal);
        assert_eq!(compare_keys_utf16("a", "aa"), Ordering::Less);
        // U+1F600 sorts after U+FB01 by code point but before it in UTF-16
        assert_eq!(compare_keys_utf16("\u{1F600}", "\u{FB01}"), Ordering::Less);
    }

    #[test]
    fn test_primitives() {
        assert_eq!(canonicalize(&InputValue::Bool(true)), "true");
        assert_eq!(canonicalize(&InputValue::Number(7)), "7");
        assert_eq!(canonicalize(&InputValue::String("0xff".into())), "\"0xff\"");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            canonicalize(&InputValue::String("a\"b\\c\n".into())),
            "\"a\\\"b\\\\c\\n\""
        );
        assert_eq!(
            canonicalize(&InputValue::String("\u{1}".into())),
            "\"\\u0001\""
        );
    }

    #[test]
    fn test_bounded_vec_shape() {
        let mut obj = BTreeMap::new();
        obj.insert(
            "storage".to_string(),
            InputValue::Array(vec![InputValue::String("1".into()), InputValue::String("0".into())]),
        );
        obj.insert("len".to_string(), InputValue::Number(1));
        assert_eq!(
            canonicalize(&InputValue::Object(obj)),
            "{\"len\":1,\"storage\":[\"1\",\"0\"]}"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(canonicalize(&InputValue::Array(vec![])), "[]");
        assert_eq!(canonicalize(&InputValue::Object(BTreeMap::new())), "{}");
    }
}
