//! Growable byte accumulator for partial reads
//!
//! [`ChunkBuffer`] collects raw bytes as they arrive from a channel and lets
//! the framing layer consume complete records from the front. Capacity grows
//! by doubling so that many small appends amortize to O(1); it never shrinks.

use crate::error::Result;

/// Byte buffer with doubling growth and prefix consumption
///
/// Invariant: the tracked capacity is always a power-of-two multiple of the
/// initial capacity and is always at least the occupied length.
#[derive(Debug)]
pub struct ChunkBuffer {
    data: Vec<u8>,
    cap: usize,
}

impl ChunkBuffer {
    /// Create a buffer with the given initial capacity (floored to 1)
    pub fn with_capacity(initial: usize) -> Self {
        let cap = initial.max(1);
        Self {
            data: Vec::new(),
            cap,
        }
    }

    /// Append bytes, doubling capacity as needed
    ///
    /// Fails only if the allocator cannot satisfy the growth, which is fatal
    /// to the loop that owns the buffer.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = self.data.len() + bytes.len();
        if needed > self.cap {
            let mut cap = self.cap;
            while cap < needed {
                cap *= 2;
            }
            self.data.try_reserve_exact(cap - self.data.len())?;
            self.cap = cap;
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Remove the first `n` bytes, shifting the remainder to the front
    ///
    /// Callers guarantee `n <= len()`. Capacity is unchanged.
    pub fn consume_prefix(&mut self, n: usize) {
        debug_assert!(n <= self.data.len());
        self.data.drain(..n);
    }

    /// View the occupied bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of occupied bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current tracked capacity
    pub fn capacity(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read_back() {
        let mut buf = ChunkBuffer::with_capacity(128);

        buf.append(b"hello").unwrap();
        buf.append(b" world").unwrap();

        assert_eq!(buf.as_slice(), b"hello world");
        assert_eq!(buf.len(), 11);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_consume_prefix_shifts_remainder() {
        let mut buf = ChunkBuffer::with_capacity(128);
        buf.append(b"abcdef").unwrap();

        buf.consume_prefix(4);

        assert_eq!(buf.as_slice(), b"ef");
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_consume_all() {
        let mut buf = ChunkBuffer::with_capacity(8);
        buf.append(b"abc").unwrap();

        buf.consume_prefix(3);

        assert!(buf.is_empty());
    }

    #[test]
    fn test_capacity_doubles_to_fit() {
        let mut buf = ChunkBuffer::with_capacity(4);

        buf.append(b"12345").unwrap(); // 5 bytes: 4 -> 8

        assert_eq!(buf.capacity(), 8);

        buf.append(&[0u8; 20]).unwrap(); // 25 bytes: 8 -> 32

        assert_eq!(buf.capacity(), 32);
    }

    #[test]
    fn test_capacity_power_of_two_multiple() {
        let initial = 128;
        let mut buf = ChunkBuffer::with_capacity(initial);

        // Append in uneven chunks up to ~10KB
        let chunk = [0xAAu8; 37];
        let mut total = 0;
        while total < 10_000 {
            buf.append(&chunk).unwrap();
            total += chunk.len();

            let cap = buf.capacity();
            assert!(cap >= buf.len());
            assert_eq!(cap % initial, 0);
            assert!((cap / initial).is_power_of_two());
        }

        // Growth is bounded: cap is the smallest power-of-two multiple >= len
        assert!(buf.capacity() < buf.len() * 2);
    }

    #[test]
    fn test_capacity_unchanged_by_consume() {
        let mut buf = ChunkBuffer::with_capacity(4);
        buf.append(&[0u8; 100]).unwrap();
        let cap = buf.capacity();

        buf.consume_prefix(100);

        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_exact_fit_does_not_grow() {
        let mut buf = ChunkBuffer::with_capacity(8);

        buf.append(&[0u8; 8]).unwrap();

        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_zero_initial_capacity_floored() {
        let buf = ChunkBuffer::with_capacity(0);

        assert_eq!(buf.capacity(), 1);
    }
}
