//! JavaScript literal helpers for inline `<script>` content.
//!
//! Every string that reaches an inline script goes through one of these, so
//! configured values can neither break out of the string literal nor close
//! the surrounding `<script>` element.

/// Double-quoted JS string literal (JSON encoding).
///
/// `matomo.js` -> `"matomo.js"`
pub fn double_quoted(value: &str) -> String {
    let json = serde_json::to_string(value).expect("str serializes");
    guard_script_close(&json)
}

/// Single-quoted JS string literal.
///
/// `2` -> `'2'`
pub fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    guard_script_close(&out)
}

/// `</` inside a script element ends it early; `<\/` is the same string in JS.
fn guard_script_close(literal: &str) -> String {
    literal.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoted() {
        assert_eq!(double_quoted("matomo.js"), "\"matomo.js\"");
        assert_eq!(double_quoted("a\"b"), "\"a\\\"b\"");
        assert_eq!(double_quoted("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_single_quoted() {
        assert_eq!(single_quoted("2"), "'2'");
        assert_eq!(single_quoted("it's"), "'it\\'s'");
        assert_eq!(single_quoted("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_script_close_is_guarded() {
        assert_eq!(double_quoted("</script>"), "\"<\\/script>\"");
        assert_eq!(single_quoted("</script>"), "'<\\/script>'");
    }
}
