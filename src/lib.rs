//! # bcast
//!
//! A local broadcast relay over Unix domain sockets: a publisher reads a
//! byte stream (typically its stdin) and fans each newline-delimited record
//! out to every connected subscriber, which reproduces the records
//! byte-for-byte on its own output.
//!
//! ```text
//!               ┌──────────────┐
//!   stdin ────► │  Publisher   │ ──► /tmp/bcast.sock
//!               │  select! {   │          │
//!               │    read,     │    ┌─────┴─────┐
//!               │    accept,   │    ▼           ▼
//!               │    shutdown, │ Subscriber  Subscriber
//!               │  }           │    │           │
//!               └──────────────┘  stdout      stdout
//! ```
//!
//! Records are framed solely by a delimiter byte (`\n` by default): no
//! length prefix, no escaping. Delivery is best-effort — a subscriber whose
//! channel fails is dropped silently and never disturbs the publisher or
//! the other subscribers. There is no flow control; pending bytes buffer
//! without bound by design.
//!
//! Each relay loop is a single task with one `select!` suspension point per
//! iteration, so no synchronisation is needed around its buffer or
//! registry. Cancellation is cooperative: both loops take a shutdown future
//! (see [`signal::wait_for_shutdown_signal`]) and exit cleanly when it
//! resolves or when their input reaches end-of-stream.
//!
//! Unix only: the rendezvous transport is `tokio::net::UnixListener` /
//! `UnixStream`.
//!
//! # Example
//! ```no_run
//! use bcast::{Publisher, Subscriber};
//!
//! # async fn example() -> bcast::Result<()> {
//! // Publisher process
//! let publisher = Publisher::bind("/tmp/bcast.sock")?;
//! publisher
//!     .run_until(tokio::io::stdin(), bcast::signal::wait_for_shutdown_signal())
//!     .await?;
//!
//! // Subscriber process
//! let subscriber = Subscriber::connect("/tmp/bcast.sock").await?;
//! subscriber
//!     .run_until(tokio::io::stdout(), bcast::signal::wait_for_shutdown_signal())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod framing;
pub mod registry;
pub mod relay;
pub mod signal;
pub mod transport;

pub use buffer::ChunkBuffer;
pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use framing::FrameSplitter;
pub use registry::SubscriberRegistry;
pub use relay::{Publisher, Subscriber};
