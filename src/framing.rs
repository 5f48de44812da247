//! Record framing over a byte stream
//!
//! The wire format is raw bytes framed solely by a delimiter (newline by
//! default): a frame is any span of bytes up to and including the next
//! delimiter. There is no length prefix and no escaping, so a delimiter
//! embedded in application data is indistinguishable from a frame boundary.
//!
//! Extracted frames are [`Bytes`], cheap to clone when the same frame is
//! written to many subscribers.

use bytes::Bytes;

use crate::buffer::ChunkBuffer;

/// Splits complete delimiter-terminated frames off a [`ChunkBuffer`]
///
/// A trailing partial record (no delimiter seen yet) is never emitted; it
/// stays in the buffer until a later append completes it.
#[derive(Debug, Clone, Copy)]
pub struct FrameSplitter {
    delimiter: u8,
}

impl FrameSplitter {
    /// Create a splitter using the newline delimiter
    pub fn new() -> Self {
        Self { delimiter: b'\n' }
    }

    /// Create a splitter with a custom delimiter byte
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Extract the next complete frame, delimiter inclusive
    ///
    /// Scans from the buffer start; on a hit the frame is copied out and its
    /// span consumed, so the next call scans from the new start.
    pub fn next_frame(&self, buf: &mut ChunkBuffer) -> Option<Bytes> {
        let pos = buf.as_slice().iter().position(|&b| b == self.delimiter)?;
        let frame = Bytes::copy_from_slice(&buf.as_slice()[..=pos]);
        buf.consume_prefix(pos + 1);
        Some(frame)
    }

    /// Extract every complete frame currently in the buffer
    pub fn extract(&self, buf: &mut ChunkBuffer) -> Vec<Bytes> {
        let mut frames = Vec::new();
        while let Some(frame) = self.next_frame(buf) {
            frames.push(frame);
        }
        frames
    }
}

impl Default for FrameSplitter {
    fn default() -> Self {
        Self::new()
    }
}
