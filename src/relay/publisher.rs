//! Publisher event loop
//!
//! Reads the input stream, splits it into delimiter-terminated frames, and
//! fans each frame out to every connected subscriber. Subscriber accepts
//! are handled in the same select cycle as input reads, so a connection
//! burst never blocks frame delivery and vice versa.

use std::future::Future;
use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::UnixStream;

use crate::buffer::ChunkBuffer;
use crate::config::RelayConfig;
use crate::error::Result;
use crate::framing::FrameSplitter;
use crate::registry::SubscriberRegistry;
use crate::transport::{self, BoundListener};

/// Broadcast publisher bound to a rendezvous path
///
/// # Example
/// ```no_run
/// use bcast::Publisher;
///
/// # async fn example() -> bcast::Result<()> {
/// let publisher = Publisher::bind("/tmp/bcast.sock")?;
/// publisher.run(tokio::io::stdin()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Publisher {
    listener: BoundListener,
    config: RelayConfig,
}

impl Publisher {
    /// Bind to the rendezvous path with default configuration
    ///
    /// The path is created here, owned for the publisher's lifetime, and
    /// removed when the publisher is dropped.
    pub fn bind(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(path, RelayConfig::default())
    }

    /// Bind to the rendezvous path with custom configuration
    pub fn with_config(path: impl AsRef<Path>, config: RelayConfig) -> Result<Self> {
        let listener = transport::listen(path)?;
        tracing::info!(path = %listener.path().display(), "publisher listening");
        Ok(Self { listener, config })
    }

    /// The rendezvous path this publisher owns
    pub fn path(&self) -> &Path {
        self.listener.path()
    }

    /// Run until the input stream reaches end-of-stream
    pub async fn run<R>(self, input: R) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        self.run_until(input, std::future::pending()).await
    }

    /// Run until end-of-stream or until `shutdown` resolves
    ///
    /// Frames are delivered to all currently connected subscribers in the
    /// order they were completed in the input; a subscriber joining
    /// mid-stream receives only frames completed after its acceptance. On
    /// exit all subscriber channels are closed and the rendezvous path is
    /// removed.
    pub async fn run_until<R, F>(self, mut input: R, shutdown: F) -> Result<()>
    where
        R: AsyncRead + Unpin,
        F: Future<Output = ()>,
    {
        let mut buf = ChunkBuffer::with_capacity(self.config.initial_buffer_capacity);
        let splitter = FrameSplitter::with_delimiter(self.config.delimiter);
        let mut registry: SubscriberRegistry<UnixStream> =
            SubscriberRegistry::with_capacity(self.config.initial_subscriber_slots);
        let mut scratch = vec![0u8; self.config.read_chunk_size];

        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested");
                    break Ok(());
                }
                read = input.read(&mut scratch) => match read {
                    Ok(0) => {
                        tracing::debug!("input reached end-of-stream");
                        break Ok(());
                    }
                    Ok(n) => {
                        if let Err(e) = buf.append(&scratch[..n]) {
                            break Err(e);
                        }
                        while let Some(frame) = splitter.next_frame(&mut buf) {
                            registry.fan_out(&frame).await;
                        }
                    }
                    Err(e) => break Err(e.into()),
                },
                accepted = self.listener.accept() => match accepted {
                    Ok(stream) => match registry.insert(stream) {
                        Ok(slot) => {
                            tracing::debug!(
                                slot,
                                subscribers = registry.active_count(),
                                "subscriber connected"
                            );
                        }
                        Err(e) => break Err(e),
                    },
                    // Transient accept failures never stop the loop
                    Err(e) => tracing::error!(error = %e, "failed to accept subscriber"),
                },
            }
        };

        registry.shutdown().await;
        result
    }
}
