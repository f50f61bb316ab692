use core::error::Error;

/// [BlockingWrite] is the library's abstraction for blocking write I/O.
///
/// It is similar to `std::io::Write`, extended with an explicit `close`, and
/// there is a blanket implementation of [BlockingWrite] for any
/// implementation of `Write`. The writer owns its sink for the duration of a
/// document and releases it when the document is closed.
///
/// Note that a JSON writer sends each token to its [BlockingWrite] in a
/// small chunk without any I/O buffering of its own. It is the client's
/// responsibility to use `std::io::BufWriter` or similar for improved
/// performance where desired.
pub trait BlockingWrite {
    type Error: Error;

    /// Appends `buf` to the stream.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Forces buffered output downstream.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Releases the sink. Implementations must tolerate repeated calls.
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// Blanket implementation that allows any [std::io::Write] implementation to
/// be used seamlessly as [BlockingWrite]. `close` flushes; releasing the
/// underlying resource is left to the stream's own drop.
impl<W: std::io::Write> BlockingWrite for W {
    type Error = std::io::Error;

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        W::write_all(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        W::flush(self)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        W::flush(self)
    }
}
