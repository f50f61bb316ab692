//! Writing JSON to a stream without materializing the document in memory.
//!
//! The writer is push-based: application code calls `begin_object`,
//! `begin_array`, `name` and the value functions in document order, and each
//! call appends its tokens to the underlying sink. The writer tracks the
//! nesting context, so it inserts separators and (optionally) indentation by
//! itself and rejects any call sequence that could not produce legal JSON.
//!
//! ```
//! use json_stream_writer::blocking::JsonWriter;
//!
//! let mut writer = JsonWriter::new(Vec::new());
//! writer.begin_object()?;
//! writer.name("id")?;
//! writer.i32_value(4711)?;
//! writer.name("tags")?;
//! writer.begin_array()?;
//! writer.string_value("a")?;
//! writer.string_value("b")?;
//! writer.end_array()?;
//! writer.end_object()?;
//! writer.close()?;
//!
//! let json = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(json, r#"{"id":4711,"tags":["a","b"]}"#);
//! # Ok::<(), json_stream_writer::WriteError<std::io::Error>>(())
//! ```
//!
//! There is a blocking API in [blocking] and an async one in [nonblocking];
//! they behave identically apart from how they perform I/O.

#[cfg(feature = "blocking")]
pub mod blocking;
#[cfg(feature = "non-blocking")]
pub mod nonblocking;
mod shared;

pub use shared::error::{NumberError, SequenceError, WriteError};
pub use shared::strictness::Strictness;
pub use shared::style::WriteStyle;
