use async_trait::async_trait;
use core::error::Error;

/// [NonBlockingWrite] is the library's abstraction for non-blocking write
/// I/O, mirroring [BlockingWrite](crate::blocking::BlockingWrite). There is a
/// blanket implementation for any [tokio::io::AsyncWrite].
///
/// Like its blocking counterpart it receives each token as a small chunk;
/// wrap the sink in `tokio::io::BufWriter` where throughput matters.
#[async_trait]
pub trait NonBlockingWrite {
    type Error: Error;

    /// Appends `buf` to the stream.
    async fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Forces buffered output downstream.
    async fn flush(&mut self) -> Result<(), Self::Error>;

    /// Releases the sink. Implementations must tolerate repeated calls.
    async fn close(&mut self) -> Result<(), Self::Error>;
}

/// Blanket implementation that allows any [tokio::io::AsyncWrite]
/// implementation to be used seamlessly as [NonBlockingWrite]. `close` shuts
/// the stream down.
#[async_trait]
impl<W: tokio::io::AsyncWrite + Unpin + Send> NonBlockingWrite for W {
    type Error = std::io::Error;

    async fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        tokio::io::AsyncWriteExt::write_all(self, buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        tokio::io::AsyncWriteExt::flush(self).await
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        tokio::io::AsyncWriteExt::shutdown(self).await
    }
}
