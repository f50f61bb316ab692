use crate::shared::error::SequenceError;
use crate::shared::escape;
use crate::shared::strictness::Strictness;
use crate::shared::style::WriteStyle;

/// The nesting context at one depth of the scope stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// No top-level value has been written yet.
    EmptyDocument,
    /// A top-level value has been written.
    NonemptyDocument,
    /// Inside `[...]` before the first element.
    EmptyArray,
    /// Inside `[...]` after an element.
    NonemptyArray,
    /// Inside `{...}` before the first member, no name pending.
    EmptyObject,
    /// Inside `{...}` after a member, no name pending.
    NonemptyObject,
    /// Inside `{...}` with a name written; a value must follow.
    DanglingName,
    /// The writer has been closed; every further call fails.
    Closed,
}

/// An object member name whose emission is postponed until its value
/// arrives. Writing the separator, the name and the name-value colon in one
/// go keeps them on a single line in whitespace-emitting styles, while a
/// nested container opened under the name still gets its newline after the
/// colon.
#[derive(Debug)]
struct DeferredName {
    text: String,
    /// whether a `,` must precede the member once it is written out
    follows_member: bool,
}

/// [DocumentState] is the sink-agnostic half of a JSON writer: the scope
/// stack, the separator policy and the per-call token assembly. The blocking
/// and the non-blocking writer drive it identically - an operation validates,
/// appends everything that must reach the stream to a scratch buffer, and the
/// frontend forwards that buffer to its sink.
///
/// Operations fail without touching state or buffer, so a rejected call
/// leaves the document exactly as it was.
pub(crate) struct DocumentState {
    stack: Vec<Scope>,
    deferred_name: Option<DeferredName>,
    strictness: Strictness,
    style: WriteStyle,
    serialize_nulls: bool,
    html_safe: bool,
    final_newline: bool,
}

impl DocumentState {
    pub fn new() -> DocumentState {
        DocumentState {
            stack: vec![Scope::EmptyDocument],
            deferred_name: None,
            strictness: Strictness::default(),
            style: WriteStyle::compact(),
            serialize_nulls: true,
            html_safe: false,
            final_newline: false,
        }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    pub fn style(&self) -> &WriteStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: WriteStyle) {
        self.style = style;
    }

    /// An empty indent selects the compact style, anything else pretty
    /// printing with `\n` newlines and the given indent per level.
    pub fn set_indent(&mut self, indent: &str) {
        if indent.is_empty() {
            self.style = WriteStyle::compact();
        } else {
            self.style = WriteStyle::new(indent, "\n");
        }
    }

    pub fn serialize_nulls(&self) -> bool {
        self.serialize_nulls
    }

    pub fn set_serialize_nulls(&mut self, serialize_nulls: bool) {
        self.serialize_nulls = serialize_nulls;
    }

    pub fn html_safe(&self) -> bool {
        self.html_safe
    }

    pub fn set_html_safe(&mut self, html_safe: bool) {
        self.html_safe = html_safe;
    }

    pub fn final_newline(&self) -> bool {
        self.final_newline
    }

    pub fn set_final_newline(&mut self, final_newline: bool) {
        self.final_newline = final_newline;
    }

    fn top(&self) -> Scope {
        self.stack.last().copied().unwrap_or(Scope::Closed)
    }

    fn set_top(&mut self, scope: Scope) {
        if let Some(top) = self.stack.last_mut() {
            *top = scope;
        }
    }

    /// Stack height; 1 outside of all containers.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_closed(&self) -> bool {
        self.top() == Scope::Closed
    }

    pub fn check_open(&self) -> Result<(), SequenceError> {
        if self.is_closed() {
            Err(SequenceError::Closed)
        } else {
            Ok(())
        }
    }

    fn push_newline_indent(&self, out: &mut String, depth: usize) {
        if self.style.is_compact() {
            return;
        }
        out.push_str(self.style.newline());
        for _ in 0..depth {
            out.push_str(self.style.indent());
        }
    }

    /// Writes the lead sequence for a value token - separator, newline,
    /// indentation and a deferred member name if one is pending - and
    /// performs the scope transition the value implies.
    fn before_value(&mut self, out: &mut String) -> Result<(), SequenceError> {
        match self.top() {
            Scope::EmptyDocument => self.set_top(Scope::NonemptyDocument),
            Scope::NonemptyDocument => {
                if !self.strictness.is_lenient() {
                    return Err(SequenceError::MultipleTopLevelValues);
                }
            }
            Scope::EmptyArray => {
                self.set_top(Scope::NonemptyArray);
                self.push_newline_indent(out, self.stack.len() - 1);
            }
            Scope::NonemptyArray => {
                out.push(',');
                self.push_newline_indent(out, self.stack.len() - 1);
            }
            Scope::DanglingName => {
                let Some(name) = self.deferred_name.take() else {
                    return Err(SequenceError::NestingProblem);
                };
                if name.follows_member {
                    out.push(',');
                }
                self.push_newline_indent(out, self.stack.len() - 1);
                escape::write_escaped(out, &name.text, self.html_safe);
                out.push_str(self.style.name_separator());
                self.set_top(Scope::NonemptyObject);
            }
            Scope::EmptyObject | Scope::NonemptyObject => {
                return Err(SequenceError::NestingProblem);
            }
            Scope::Closed => return Err(SequenceError::Closed),
        }
        Ok(())
    }

    pub fn begin_array(&mut self, out: &mut String) -> Result<(), SequenceError> {
        self.open_scope(Scope::EmptyArray, '[', out)
    }

    pub fn begin_object(&mut self, out: &mut String) -> Result<(), SequenceError> {
        self.open_scope(Scope::EmptyObject, '{', out)
    }

    fn open_scope(
        &mut self,
        scope: Scope,
        bracket: char,
        out: &mut String,
    ) -> Result<(), SequenceError> {
        self.check_open()?;
        self.before_value(out)?;
        self.stack.push(scope);
        out.push(bracket);
        Ok(())
    }

    pub fn end_array(&mut self, out: &mut String) -> Result<(), SequenceError> {
        self.check_open()?;
        match self.top() {
            Scope::EmptyArray => {}
            Scope::NonemptyArray => {
                self.push_newline_indent(out, self.stack.len().saturating_sub(2));
            }
            _ => return Err(SequenceError::NestingProblem),
        }
        self.stack.pop();
        out.push(']');
        Ok(())
    }

    pub fn end_object(&mut self, out: &mut String) -> Result<(), SequenceError> {
        self.check_open()?;
        match self.top() {
            Scope::DanglingName => {
                let name = self
                    .deferred_name
                    .as_ref()
                    .map(|n| n.text.clone())
                    .unwrap_or_default();
                return Err(SequenceError::DanglingName(name));
            }
            Scope::EmptyObject => {}
            Scope::NonemptyObject => {
                self.push_newline_indent(out, self.stack.len().saturating_sub(2));
            }
            _ => return Err(SequenceError::NestingProblem),
        }
        self.stack.pop();
        out.push('}');
        Ok(())
    }

    /// Stores a member name; the literal reaches the stream together with
    /// the value that follows it.
    pub fn name(&mut self, name: &str) -> Result<(), SequenceError> {
        self.check_open()?;
        let follows_member = match self.top() {
            Scope::EmptyObject => false,
            Scope::NonemptyObject => true,
            Scope::DanglingName => return Err(SequenceError::AlreadyWroteName),
            _ => return Err(SequenceError::NameOutsideObject),
        };
        self.deferred_name = Some(DeferredName {
            text: name.to_owned(),
            follows_member,
        });
        self.set_top(Scope::DanglingName);
        Ok(())
    }

    /// Emits a pre-rendered value token: a literal, a number or raw JSON
    /// text. The caller has already validated the token's content.
    pub fn plain_value(&mut self, token: &str, out: &mut String) -> Result<(), SequenceError> {
        self.check_open()?;
        self.before_value(out)?;
        out.push_str(token);
        Ok(())
    }

    pub fn string_value(&mut self, value: &str, out: &mut String) -> Result<(), SequenceError> {
        self.check_open()?;
        self.before_value(out)?;
        escape::write_escaped(out, value, self.html_safe);
        Ok(())
    }

    /// Emits `null` - unless null serialization is disabled and a name is
    /// pending, in which case the whole member is dropped: the name is
    /// discarded and the object scope restored as if `name` had never been
    /// called.
    pub fn null_value(&mut self, out: &mut String) -> Result<(), SequenceError> {
        self.check_open()?;
        if self.top() == Scope::DanglingName && !self.serialize_nulls {
            if let Some(name) = self.deferred_name.take() {
                self.set_top(if name.follows_member {
                    Scope::NonemptyObject
                } else {
                    Scope::EmptyObject
                });
            }
            return Ok(());
        }
        self.plain_value("null", out)
    }

    /// Checks that the document may end here and emits the closing
    /// whitespace. The writer is `Closed` afterwards; callers are expected
    /// to have handled idempotency and to flush and release their sink next.
    pub fn finish(&mut self, out: &mut String) -> Result<(), SequenceError> {
        match self.top() {
            Scope::NonemptyDocument => {}
            Scope::EmptyDocument if self.strictness.is_lenient() => {}
            _ => return Err(SequenceError::IncompleteDocument),
        }
        if self.final_newline {
            let newline = self.style.newline();
            out.push_str(if newline.is_empty() { "\n" } else { newline });
        }
        self.stack.clear();
        self.stack.push(Scope::Closed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(state: &mut DocumentState, op: impl FnOnce(&mut DocumentState, &mut String) -> Result<(), SequenceError>) -> String {
        let mut out = String::new();
        op(state, &mut out).unwrap();
        out
    }

    #[test]
    fn test_depth_returns_to_one() {
        let mut state = DocumentState::new();
        assert_eq!(state.depth(), 1);
        let mut out = String::new();
        state.begin_array(&mut out).unwrap();
        state.begin_object(&mut out).unwrap();
        state.name("deep").unwrap();
        state.begin_array(&mut out).unwrap();
        assert_eq!(state.depth(), 4);
        state.end_array(&mut out).unwrap();
        state.end_object(&mut out).unwrap();
        state.end_array(&mut out).unwrap();
        assert_eq!(state.depth(), 1);
        assert_eq!(out, r#"[{"deep":[]}]"#);
    }

    #[test]
    fn test_rejected_call_leaves_state_untouched() {
        let mut state = DocumentState::new();
        let mut out = String::new();
        state.begin_object(&mut out).unwrap();
        state.name("a").unwrap();

        // a second name is rejected, the first stays pending
        assert_eq!(state.name("b"), Err(SequenceError::AlreadyWroteName));
        assert_eq!(
            state.end_object(&mut String::new()),
            Err(SequenceError::DanglingName("a".to_owned()))
        );

        let value = drive(&mut state, |s, o| s.plain_value("1", o));
        assert_eq!(value, r#""a":1"#);
    }

    #[test]
    fn test_finish_on_empty_document() {
        let mut state = DocumentState::new();
        assert_eq!(
            state.finish(&mut String::new()),
            Err(SequenceError::IncompleteDocument)
        );

        let mut lenient = DocumentState::new();
        lenient.set_strictness(Strictness::Lenient);
        assert_eq!(lenient.finish(&mut String::new()), Ok(()));
        assert!(lenient.is_closed());
    }

    #[test]
    fn test_final_newline_defaults_to_line_feed_in_compact_style() {
        let mut state = DocumentState::new();
        state.set_final_newline(true);
        let mut out = String::new();
        state.plain_value("true", &mut out).unwrap();
        state.finish(&mut out).unwrap();
        assert_eq!(out, "true\n");
    }
}
