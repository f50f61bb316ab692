//! Pretty printing and the other formatting options.

use json_stream_writer::{WriteError, WriteStyle};
use json_stream_writer::blocking::JsonWriter;

fn main() -> Result<(), WriteError<std::io::Error>> {
    // 'new_pretty' selects two-space indentation. Alternatively, any indent
    //  can be configured through 'set_indent' or a full WriteStyle.
    let mut writer = JsonWriter::new_pretty(Vec::new());
    writer.set_style(WriteStyle::new("    ", "\n"));

    // HTML-safe mode additionally escapes < > & = ' so the output can be
    //  embedded in HTML or XML without further encoding.
    writer.set_html_safe(true);

    // With null serialization disabled, members whose value turns out to be
    //  null are dropped entirely instead of being written as 'null'.
    writer.set_serialize_nulls(false);

    writer.begin_object()?;
    writer.name("tag")?;
    writer.string_value("<section>")?;
    writer.name("comment")?;
    writer.optional_string_value(None)?; // dropped, including the name
    writer.name("values")?;
    writer.begin_array()?;
    writer.f64_value(6.0)?;
    writer.f64_value(7.5)?;
    writer.end_array()?;
    writer.end_object()?;
    writer.close()?;

    println!("{}", String::from_utf8(writer.into_inner()).unwrap());
    Ok(())
}
