//! Error types for the relay
//!
//! Setup failures (bad address, bind/connect) and resource exhaustion are
//! fatal and surface through the process exit status. Per-subscriber send
//! failures are not errors at all: they are absorbed inside the registry.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, RelayError>;

/// Error type for relay operations
#[derive(Debug)]
pub enum RelayError {
    /// Rendezvous path exceeds the platform socket address limit
    AddressTooLong {
        /// The offending path
        path: PathBuf,
        /// Maximum number of bytes the platform accepts
        max: usize,
    },
    /// Failed to bind or listen on the rendezvous path
    Bind {
        /// The rendezvous path
        path: PathBuf,
        /// Underlying socket error
        source: io::Error,
    },
    /// Failed to connect to the rendezvous path (publisher not running?)
    Connect {
        /// The rendezvous path
        path: PathBuf,
        /// Underlying socket error
        source: io::Error,
    },
    /// I/O error on the input stream or an upstream channel
    Io(io::Error),
    /// Buffer or registry growth could not allocate
    OutOfMemory(TryReserveError),
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::AddressTooLong { path, max } => {
                write!(
                    f,
                    "socket path too long ({} bytes, max {}): {}",
                    path.as_os_str().len(),
                    max,
                    path.display()
                )
            }
            RelayError::Bind { path, source } => {
                write!(f, "cannot bind {}: {}", path.display(), source)
            }
            RelayError::Connect { path, source } => {
                write!(f, "cannot connect to {}: {}", path.display(), source)
            }
            RelayError::Io(e) => write!(f, "i/o error: {}", e),
            RelayError::OutOfMemory(e) => write!(f, "out of memory: {}", e),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Bind { source, .. } | RelayError::Connect { source, .. } => Some(source),
            RelayError::Io(e) => Some(e),
            RelayError::OutOfMemory(e) => Some(e),
            RelayError::AddressTooLong { .. } => None,
        }
    }
}

impl From<io::Error> for RelayError {
    fn from(e: io::Error) -> Self {
        RelayError::Io(e)
    }
}

impl From<TryReserveError> for RelayError {
    fn from(e: TryReserveError) -> Self {
        RelayError::OutOfMemory(e)
    }
}
