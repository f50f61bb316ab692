//! Writing JSON through non-blocking I/O. [JsonWriter] wraps any
//! [tokio::io::AsyncWrite] (or custom [NonBlockingWrite] implementation) and
//! emits one document to it.

pub(crate) mod io;
pub(crate) mod json_writer;

pub use io::*;
pub use json_writer::*;
