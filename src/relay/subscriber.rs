//! Subscriber event loop
//!
//! A simplified mirror of the publisher: one upstream channel, same framing
//! contract, every complete frame written verbatim to the output.

use std::future::Future;
use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::buffer::ChunkBuffer;
use crate::config::RelayConfig;
use crate::error::Result;
use crate::framing::FrameSplitter;
use crate::transport;

/// Broadcast subscriber connected to a publisher's rendezvous path
///
/// # Example
/// ```no_run
/// use bcast::Subscriber;
///
/// # async fn example() -> bcast::Result<()> {
/// let subscriber = Subscriber::connect("/tmp/bcast.sock").await?;
/// subscriber
///     .run_until(tokio::io::stdout(), std::future::pending())
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Subscriber {
    stream: UnixStream,
    config: RelayConfig,
}

impl Subscriber {
    /// Connect to the rendezvous path with default configuration
    ///
    /// Fails if the publisher is not running.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(path, RelayConfig::default()).await
    }

    /// Connect to the rendezvous path with custom configuration
    pub async fn with_config(path: impl AsRef<Path>, config: RelayConfig) -> Result<Self> {
        let stream = transport::connect(path).await?;
        Ok(Self { stream, config })
    }

    /// Wrap an already-connected upstream channel
    pub fn from_stream(stream: UnixStream, config: RelayConfig) -> Self {
        Self { stream, config }
    }

    /// Run until the upstream channel closes or `shutdown` resolves
    ///
    /// Received frames are reproduced byte-for-byte on `output`, with no
    /// added framing. A partial record is held back until the upstream
    /// completes it with a delimiter.
    pub async fn run_until<W, F>(mut self, mut output: W, shutdown: F) -> Result<()>
    where
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        let mut buf = ChunkBuffer::with_capacity(self.config.initial_buffer_capacity);
        let splitter = FrameSplitter::with_delimiter(self.config.delimiter);
        let mut scratch = vec![0u8; self.config.read_chunk_size];

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested");
                    return Ok(());
                }
                read = self.stream.read(&mut scratch) => match read {
                    Ok(0) => {
                        tracing::debug!("upstream channel closed");
                        return Ok(());
                    }
                    Ok(n) => {
                        buf.append(&scratch[..n])?;
                        let mut wrote = false;
                        while let Some(frame) = splitter.next_frame(&mut buf) {
                            output.write_all(&frame).await?;
                            wrote = true;
                        }
                        if wrote {
                            output.flush().await?;
                        }
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }
    }
}
