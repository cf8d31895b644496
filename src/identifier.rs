//! Identifier and literal helpers for emitted Go source.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// `bool_attribute` -> `BoolAttribute`.
pub fn to_pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// `bool_attribute` -> `boolAttribute`.
pub fn to_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Quotes `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
