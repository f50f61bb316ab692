//! Strictness modes, shown by writing JSON-lines style output.
//!
//! By default the writer holds to RFC 8259: one top-level value per
//! document, and no representation for non-finite numbers. Lenient mode
//! relaxes exactly these two rules, which is what formats like JSON lines
//! and some legacy consumers need.

use json_stream_writer::{Strictness, WriteError};
use json_stream_writer::blocking::JsonWriter;

fn main() -> Result<(), WriteError<std::io::Error>> {
    let mut writer = JsonWriter::new(Vec::new());
    writer.set_strictness(Strictness::Lenient);

    // One top-level object per record; a lenient writer accepts as many as
    //  we care to write, concatenated back to back.
    for (name, measurement) in [("a", 1.5), ("b", f64::NAN), ("c", 0.25)] {
        writer.begin_object()?;
        writer.name("sensor")?;
        writer.string_value(name)?;
        writer.name("value")?;
        // In lenient mode a NaN measurement is written as the literal NaN;
        //  the default modes would reject it here.
        writer.f64_value(measurement)?;
        writer.end_object()?;
    }
    writer.close()?;

    println!("{}", String::from_utf8(writer.into_inner()).unwrap());
    Ok(())
}
