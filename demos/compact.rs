//! This example presents the basic API for writing JSON with blocking I/O.
//!
//! The writer works against any [std::io::Write]; here we use a `Vec<u8>` so
//! the result can be printed at the end.

use json_stream_writer::WriteError;
use json_stream_writer::blocking::JsonWriter;

fn main() -> Result<(), WriteError<std::io::Error>> {
    // The first step is wrapping the raw Write instance in a JsonWriter. The
    //  default configuration produces compact output without any whitespace.
    let mut writer = JsonWriter::new(Vec::new());

    // The document is written in document order: structural calls open and
    //  close objects and arrays, and inside an object each member is a
    //  'name' call followed by one value call.
    writer.begin_object()?;
    writer.name("name")?;
    writer.string_value("John Smith")?;
    writer.name("age")?;
    writer.u32_value(49)?;

    // Nesting works the same way: a 'begin_array' in a value position opens
    //  an array under the preceding name.
    writer.name("favorite-colors")?;
    writer.begin_array()?;
    writer.string_value("red")?;
    writer.string_value("blue")?;
    writer.string_value("yellow")?;
    writer.end_array()?;

    writer.end_object()?;

    // 'close' verifies that the document is complete, flushes, and releases
    //  the sink. Calls made out of order - a value without a name inside an
    //  object, say, or a second top-level value - would have failed with a
    //  descriptive error instead of producing broken JSON.
    writer.close()?;

    println!("{}", String::from_utf8(writer.into_inner()).unwrap());
    Ok(())
}
