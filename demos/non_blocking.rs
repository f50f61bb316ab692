//! The non-blocking API, writing to a tokio sink.
//!
//! The async writer mirrors the blocking one call for call; the only
//! difference is that writing operations are awaited.

use json_stream_writer::WriteError;
use json_stream_writer::nonblocking::JsonWriter;

#[tokio::main]
async fn main() -> Result<(), WriteError<std::io::Error>> {
    // Anything implementing tokio::io::AsyncWrite works as a sink; stdout
    //  here, a TcpStream or file in a real service.
    let mut writer = JsonWriter::new_pretty(tokio::io::stdout());

    writer.begin_object().await?;
    writer.name("service")?;
    writer.string_value("demo").await?;
    writer.name("uptime-seconds")?;
    writer.u64_value(3600).await?;
    writer.name("load")?;
    writer.begin_array().await?;
    writer.f64_value(0.25).await?;
    writer.f64_value(0.5).await?;
    writer.end_array().await?;
    writer.end_object().await?;
    writer.close().await?;

    Ok(())
}
