/// [WriteStyle] controls how whitespace is added between JSON tokens in the
/// output. It does not affect the JSON's semantics, but only its looks and
/// size.
///
/// A style consists of an indent string, repeated once per nesting level, and
/// a newline string written before each element. When both are empty the
/// output is compact: no whitespace at all, and `:` instead of `: ` after
/// object member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStyle {
    indent: String,
    newline: String,
}

impl WriteStyle {
    /// A style without any whitespace, minimizing output size.
    pub fn compact() -> WriteStyle {
        WriteStyle {
            indent: String::new(),
            newline: String::new(),
        }
    }

    /// Two-space indentation with `\n` newlines, improving human readability.
    pub fn pretty() -> WriteStyle {
        WriteStyle::new("  ", "\n")
    }

    /// Create a style with an explicit indent and newline string.
    ///
    /// Panics if `indent` contains anything other than spaces and tabs, or
    /// `newline` anything other than `\r` and `\n` - other characters would
    /// change the document's meaning.
    pub fn new(indent: &str, newline: &str) -> WriteStyle {
        assert!(
            indent.chars().all(|c| c == ' ' || c == '\t'),
            "indent must consist solely of spaces and tabs"
        );
        assert!(
            newline.chars().all(|c| c == '\r' || c == '\n'),
            "newline must consist solely of \\r and \\n"
        );
        WriteStyle {
            indent: indent.to_owned(),
            newline: newline.to_owned(),
        }
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    pub(crate) fn is_compact(&self) -> bool {
        self.indent.is_empty() && self.newline.is_empty()
    }

    /// `": "` in whitespace-emitting styles, `":"` in compact output.
    pub(crate) fn name_separator(&self) -> &'static str {
        if self.is_compact() { ":" } else { ": " }
    }
}

impl Default for WriteStyle {
    fn default() -> Self {
        WriteStyle::compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        let style = WriteStyle::compact();
        assert_eq!(style.indent(), "");
        assert_eq!(style.newline(), "");
        assert!(style.is_compact());
        assert_eq!(style.name_separator(), ":");
    }

    #[test]
    fn test_pretty() {
        let style = WriteStyle::pretty();
        assert_eq!(style.indent(), "  ");
        assert_eq!(style.newline(), "\n");
        assert!(!style.is_compact());
        assert_eq!(style.name_separator(), ": ");
    }

    #[test]
    fn test_custom() {
        let style = WriteStyle::new("\t", "\r\n");
        assert_eq!(style.indent(), "\t");
        assert_eq!(style.newline(), "\r\n");
        assert!(!style.is_compact());
    }

    #[test]
    #[should_panic(expected = "indent must consist solely of spaces and tabs")]
    fn test_rejects_non_whitespace_indent() {
        WriteStyle::new("--", "\n");
    }

    #[test]
    #[should_panic(expected = "newline must consist solely of \\r and \\n")]
    fn test_rejects_non_newline() {
        WriteStyle::new("  ", ";");
    }
}
