use core::fmt::Display;

use crate::nonblocking::io::NonBlockingWrite;
use crate::shared::error::{NumberError, WriteError};
use crate::shared::number;
use crate::shared::state::DocumentState;
use crate::shared::strictness::Strictness;
use crate::shared::style::WriteStyle;

/// The non-blocking counterpart of
/// [blocking::JsonWriter](crate::blocking::JsonWriter): the same document
/// model, call-order validation, escaping and number handling, with the
/// sink I/O awaited instead of blocked on.
///
/// All sequencing decisions are made synchronously before the single write
/// per operation, so cancelling an operation at its await point leaves
/// either the complete token written or nothing of it.
pub struct JsonWriter<W: NonBlockingWrite> {
    sink: W,
    state: DocumentState,
    scratch: String,
}

impl<W: NonBlockingWrite> JsonWriter<W> {
    /// Create a [JsonWriter] that generates compact JSON output, i.e. with a
    /// minimum of whitespace.
    pub fn new(sink: W) -> JsonWriter<W> {
        JsonWriter {
            sink,
            state: DocumentState::new(),
            scratch: String::new(),
        }
    }

    /// Create a [JsonWriter] that generates pretty-printed JSON output with
    /// the default two-space indentation.
    pub fn new_pretty(sink: W) -> JsonWriter<W> {
        let mut writer = JsonWriter::new(sink);
        writer.set_style(WriteStyle::pretty());
        writer
    }

    /// Configure how far the writer may deviate from RFC 8259. The default
    /// is [Strictness::LegacyStrict].
    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.state.set_strictness(strictness);
    }

    pub fn strictness(&self) -> Strictness {
        self.state.strictness()
    }

    /// Legacy shorthand: `true` selects [Strictness::Lenient], `false` the
    /// default [Strictness::LegacyStrict].
    pub fn set_lenient(&mut self, lenient: bool) {
        self.set_strictness(if lenient {
            Strictness::Lenient
        } else {
            Strictness::LegacyStrict
        });
    }

    pub fn is_lenient(&self) -> bool {
        self.strictness().is_lenient()
    }

    pub fn set_style(&mut self, style: WriteStyle) {
        self.state.set_style(style);
    }

    pub fn style(&self) -> &WriteStyle {
        self.state.style()
    }

    /// Shorthand for [JsonWriter::set_style]: an empty `indent` selects the
    /// compact style, anything else pretty printing with `\n` newlines and
    /// the given indent per nesting level.
    pub fn set_indent(&mut self, indent: &str) {
        self.state.set_indent(indent);
    }

    /// Configure whether `null_value` with a pending member name writes the
    /// member or drops it. The default is `true` (the member is written).
    pub fn set_serialize_nulls(&mut self, serialize_nulls: bool) {
        self.state.set_serialize_nulls(serialize_nulls);
    }

    pub fn serialize_nulls(&self) -> bool {
        self.state.serialize_nulls()
    }

    /// Configure whether string output additionally escapes `< > & = '` so
    /// it can be embedded in HTML and XML. The default is `false`.
    pub fn set_html_safe(&mut self, html_safe: bool) {
        self.state.set_html_safe(html_safe);
    }

    pub fn is_html_safe(&self) -> bool {
        self.state.html_safe()
    }

    /// Configure whether `close` appends a trailing newline to the document.
    /// The default is `false`.
    pub fn set_final_newline(&mut self, final_newline: bool) {
        self.state.set_final_newline(final_newline);
    }

    pub fn final_newline(&self) -> bool {
        self.state.final_newline()
    }

    /// Opens a JSON array, writing `[`.
    pub async fn begin_array(&mut self) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.begin_array(&mut self.scratch)?;
        self.write_scratch().await
    }

    /// Closes the innermost array, writing `]`.
    pub async fn end_array(&mut self) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.end_array(&mut self.scratch)?;
        self.write_scratch().await
    }

    /// Opens a JSON object, writing `{`.
    pub async fn begin_object(&mut self) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.begin_object(&mut self.scratch)?;
        self.write_scratch().await
    }

    /// Closes the innermost object, writing `}`.
    pub async fn end_object(&mut self) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.end_object(&mut self.scratch)?;
        self.write_scratch().await
    }

    /// Writes the name of the next object member. Nothing reaches the sink
    /// until the member's value is written, which is why this is the one
    /// writing operation that does not await.
    pub fn name(&mut self, name: &str) -> Result<(), WriteError<W::Error>> {
        self.state.name(name)?;
        Ok(())
    }

    /// Writes `true` or `false`.
    pub async fn bool_value(&mut self, value: bool) -> Result<(), WriteError<W::Error>> {
        self.plain_value(if value { "true" } else { "false" }).await
    }

    /// Writes the `null` literal. With null serialization disabled (see
    /// [JsonWriter::set_serialize_nulls]) and a member name pending, the
    /// whole member is dropped instead.
    pub async fn null_value(&mut self) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.null_value(&mut self.scratch)?;
        self.write_scratch().await
    }

    /// Writes `value` as an escaped and double-quoted JSON string literal.
    pub async fn string_value(&mut self, value: &str) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.string_value(value, &mut self.scratch)?;
        self.write_scratch().await
    }

    /// Writes a string value, with `None` written as the `null` literal (and
    /// subject to the null serialization setting, like
    /// [JsonWriter::null_value]).
    pub async fn optional_string_value(
        &mut self,
        value: Option<&str>,
    ) -> Result<(), WriteError<W::Error>> {
        match value {
            Some(value) => self.string_value(value).await,
            None => self.null_value().await,
        }
    }

    /// Writes an `f64` in the shortest decimal form that parses back to the
    /// same value. Non-finite values are rejected unless the writer is
    /// lenient, in which case they are written as the literals `NaN`,
    /// `Infinity` and `-Infinity`.
    pub async fn f64_value(&mut self, value: f64) -> Result<(), WriteError<W::Error>> {
        self.state.check_open()?;
        let token = number::f64_token(value, self.strictness())?;
        self.plain_value(&token).await
    }

    /// The `f32` analog of [JsonWriter::f64_value].
    pub async fn f32_value(&mut self, value: f32) -> Result<(), WriteError<W::Error>> {
        self.state.check_open()?;
        let token = number::f32_token(value, self.strictness())?;
        self.plain_value(&token).await
    }

    /// Writes number text produced by an external numeric type, validated
    /// against the JSON number grammar and emitted verbatim.
    pub async fn number_value<N: Display + Send>(
        &mut self,
        value: N,
    ) -> Result<(), WriteError<W::Error>> {
        self.state.check_open()?;
        let text = value.to_string();
        if !number::is_valid_number_token(&text, self.strictness()) {
            return Err(NumberError::InvalidLiteral {
                type_name: core::any::type_name::<N>(),
                text,
            }
            .into());
        }
        self.plain_value(&text).await
    }

    /// Writes `json` verbatim in a value position, without validation; see
    /// the caveats on
    /// [blocking::JsonWriter::raw_json](crate::blocking::JsonWriter::raw_json).
    pub async fn raw_json(&mut self, json: &str) -> Result<(), WriteError<W::Error>> {
        self.plain_value(json).await
    }

    /// Forwards a flush to the sink.
    pub async fn flush(&mut self) -> Result<(), WriteError<W::Error>> {
        self.state.check_open()?;
        self.sink.flush().await.map_err(WriteError::Io)
    }

    /// Ends the document: verifies that all containers have been closed,
    /// flushes and closes the sink. Only the first call has an effect.
    pub async fn close(&mut self) -> Result<(), WriteError<W::Error>> {
        if self.state.is_closed() {
            return Ok(());
        }
        self.scratch.clear();
        self.state.finish(&mut self.scratch)?;
        self.write_scratch().await?;
        self.sink.flush().await.map_err(WriteError::Io)?;
        self.sink.close().await.map_err(WriteError::Io)
    }

    /// End this [JsonWriter]'s lifetime, returning the sink it owned. The
    /// sink is returned as-is: it is neither flushed nor closed.
    pub fn into_inner(self) -> W {
        self.sink
    }

    async fn plain_value(&mut self, token: &str) -> Result<(), WriteError<W::Error>> {
        self.scratch.clear();
        self.state.plain_value(token, &mut self.scratch)?;
        self.write_scratch().await
    }

    async fn write_scratch(&mut self) -> Result<(), WriteError<W::Error>> {
        if self.scratch.is_empty() {
            return Ok(());
        }
        self.sink
            .write_all(self.scratch.as_bytes())
            .await
            .map_err(WriteError::Io)
    }
}

macro_rules! write_int_value {
    ($t:ty ; $f:ident) => {
        impl<W: NonBlockingWrite> JsonWriter<W> {
            /// Writes `value` as a JSON number.
            pub async fn $f(&mut self, value: $t) -> Result<(), WriteError<W::Error>> {
                let mut buf = itoa::Buffer::new();
                let token = buf.format(value);
                self.scratch.clear();
                self.state.plain_value(token, &mut self.scratch)?;
                self.write_scratch().await
            }
        }
    };
}
write_int_value!(i8; i8_value);
write_int_value!(u8; u8_value);
write_int_value!(i16; i16_value);
write_int_value!(u16; u16_value);
write_int_value!(i32; i32_value);
write_int_value!(u32; u32_value);
write_int_value!(i64; i64_value);
write_int_value!(u64; u64_value);
write_int_value!(i128; i128_value);
write_int_value!(u128; u128_value);
write_int_value!(isize; isize_value);
write_int_value!(usize; usize_value);
