//! Unix domain socket glue
//!
//! The rendezvous point is a filesystem path. The publisher creates and
//! owns the path for its lifetime; subscribers only connect to it and fail
//! if the publisher is not running.

use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tokio::net::{UnixListener, UnixStream};

use crate::error::{RelayError, Result};

/// Longest socket path accepted, in bytes
///
/// `sockaddr_un` reserves 108 bytes for the path on Linux (104 on the BSDs)
/// including the NUL terminator. Paths longer than this are rejected up
/// front with a distinct error rather than truncated.
pub const MAX_PATH_LEN: usize = if cfg!(target_os = "linux") { 107 } else { 103 };

/// A listening socket that owns its filesystem address
///
/// The path is unlinked when the listener is dropped, on clean exit and
/// error paths alike.
#[derive(Debug)]
pub struct BoundListener {
    listener: UnixListener,
    path: PathBuf,
}

impl BoundListener {
    /// The rendezvous path this listener is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accept one pending subscriber connection
    pub async fn accept(&self) -> std::io::Result<UnixStream> {
        let (stream, _addr) = self.listener.accept().await?;
        Ok(stream)
    }
}

impl Drop for BoundListener {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().as_bytes().len() > MAX_PATH_LEN {
        return Err(RelayError::AddressTooLong {
            path: path.to_path_buf(),
            max: MAX_PATH_LEN,
        });
    }
    Ok(())
}

/// Bind and listen on the rendezvous path
///
/// Fails if the path is too long, already exists, or cannot be bound.
pub fn listen(path: impl AsRef<Path>) -> Result<BoundListener> {
    let path = path.as_ref();
    validate_path(path)?;

    let listener = UnixListener::bind(path).map_err(|source| RelayError::Bind {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BoundListener {
        listener,
        path: path.to_path_buf(),
    })
}

/// Connect to a publisher's rendezvous path
pub async fn connect(path: impl AsRef<Path>) -> Result<UnixStream> {
    let path = path.as_ref();
    validate_path(path)?;

    UnixStream::connect(path)
        .await
        .map_err(|source| RelayError::Connect {
            path: path.to_path_buf(),
            source,
        })
}
