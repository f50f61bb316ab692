/// Appends the JSON string literal for `s` to `out`, including the enclosing
/// double quotes.
///
/// `"` and `\` are escaped with a backslash, the control characters with
/// short escapes where JSON defines one and as `\u00xx` otherwise. U+2028 and
/// U+2029 are legal in JSON strings but not in JavaScript source, so they are
/// always escaped. With `html_safe` set, the characters `< > & = '` are
/// escaped as well, making the literal safe for embedding in HTML and XML
/// without further encoding.
pub(crate) fn write_escaped(out: &mut String, s: &str, html_safe: bool) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => push_unicode_escape(out, c),
            '<' | '>' | '&' | '=' | '\'' if html_safe => push_unicode_escape(out, c),
            c if (c as u32) < 0x20 => push_unicode_escape(out, c),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_unicode_escape(out: &mut String, c: char) {
    static HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";
    let code = c as u32;
    out.push_str("\\u");
    for shift in [12u32, 8, 4, 0] {
        out.push(HEX_DIGITS[((code >> shift) & 0xf) as usize] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn escaped(s: &str, html_safe: bool) -> String {
        let mut out = String::new();
        write_escaped(&mut out, s, html_safe);
        out
    }

    /// The JSON string literal `"\uxxxx"` for a single escaped character.
    fn unicode_escape_literal(c: char) -> String {
        format!("\"\\u{:04x}\"", c as u32)
    }

    #[rstest]
    #[case::empty("", r#""""#)]
    #[case::text("yo", r#""yo""#)]
    #[case::non_ascii("äöü", r#""äöü""#)]
    #[case::quotation_mark("\"", r#""\"""#)]
    #[case::backslash("\\", r#""\\""#)]
    #[case::backspace("\u{8}", r#""\b""#)]
    #[case::form_feed("\u{c}", r#""\f""#)]
    #[case::line_feed("\n", r#""\n""#)]
    #[case::carriage_return("\r", r#""\r""#)]
    #[case::tab("\t", r#""\t""#)]
    #[case::space_untouched(" ", r#"" ""#)]
    #[case::angle_brackets_untouched("<html>", r#""<html>""#)]
    #[case::ampersand_untouched("a&b=c", r#""a&b=c""#)]
    #[case::apostrophe_untouched("it's", r#""it's""#)]
    #[case::combination("asdf \n jklö \t!", r#""asdf \n jklö \t!""#)]
    fn test_write_escaped(#[case] s: &str, #[case] expected: &str) {
        assert_eq!(escaped(s, false), expected);
    }

    #[test]
    fn test_control_characters_without_short_escape() {
        for code in 0x00u32..0x20 {
            let c = char::from_u32(code).unwrap();
            if matches!(c, '\u{8}' | '\u{c}' | '\n' | '\r' | '\t') {
                continue;
            }
            assert_eq!(escaped(&c.to_string(), false), unicode_escape_literal(c));
        }
    }

    #[test]
    fn test_line_and_paragraph_separator() {
        for c in ['\u{2028}', '\u{2029}'] {
            assert_eq!(escaped(&c.to_string(), false), unicode_escape_literal(c));
            assert_eq!(escaped(&c.to_string(), true), unicode_escape_literal(c));
        }
    }

    #[test]
    fn test_html_safe_escapes() {
        for c in ['<', '>', '&', '=', '\''] {
            assert_eq!(escaped(&c.to_string(), true), unicode_escape_literal(c));
        }
    }

    #[test]
    fn test_html_safe_mixed_content() {
        assert_eq!(
            escaped("</script>", true),
            format!("\"\\u{:04x}/script\\u{:04x}\"", '<' as u32, '>' as u32)
        );
        assert_eq!(escaped("a\nb<c", true), format!("\"a\\nb\\u{:04x}c\"", '<' as u32));
    }
}
