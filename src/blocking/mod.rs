//! Writing JSON through blocking I/O. [JsonWriter] wraps any
//! [std::io::Write] (or custom [BlockingWrite] implementation) and emits one
//! document to it.

pub(crate) mod io;
pub(crate) mod json_writer;

pub use io::*;
pub use json_writer::*;
