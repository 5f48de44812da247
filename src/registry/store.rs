//! Slot store implementation
//!
//! Generic over the writer type so the fan-out and failure paths can be
//! driven by mock I/O in tests; the publisher instantiates it with
//! `tokio::net::UnixStream`.

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;

use super::slot::SubscriberSlot;

/// Ordered collection of subscriber slots with tombstone reuse
///
/// Backing storage grows by doubling, the same amortized policy as
/// [`ChunkBuffer`](crate::ChunkBuffer) applied to fixed-size slots.
#[derive(Debug)]
pub struct SubscriberRegistry<W> {
    slots: Vec<SubscriberSlot<W>>,
    cap: usize,
}

impl<W: AsyncWrite + Unpin> SubscriberRegistry<W> {
    /// Create a registry with the given initial slot capacity (floored to 1)
    pub fn with_capacity(initial_slots: usize) -> Self {
        Self {
            slots: Vec::new(),
            cap: initial_slots.max(1),
        }
    }

    /// Insert a subscriber, reusing the first tombstone slot if any
    ///
    /// Returns the slot index. Fails only if appending a new slot cannot
    /// allocate.
    pub fn insert(&mut self, writer: W) -> Result<usize> {
        if let Some(i) = self.slots.iter().position(SubscriberSlot::is_tombstone) {
            self.slots[i] = SubscriberSlot::Active(writer);
            return Ok(i);
        }

        if self.slots.len() == self.cap {
            let cap = self.cap * 2;
            self.slots.try_reserve_exact(cap - self.slots.len())?;
            self.cap = cap;
        }
        self.slots.push(SubscriberSlot::Active(writer));
        Ok(self.slots.len() - 1)
    }

    /// Broadcast one frame to every active subscriber in slot order
    ///
    /// A subscriber whose write fails transitions to a tombstone within
    /// this same pass; dropping its writer closes the channel. Peer
    /// failures never propagate to the caller. Returns the number of
    /// subscribers the frame was delivered to.
    pub async fn fan_out(&mut self, frame: &Bytes) -> usize {
        let mut delivered = 0;

        for slot in self.slots.iter_mut() {
            if let SubscriberSlot::Active(writer) = slot {
                match writer.write_all(frame).await {
                    Ok(()) => delivered += 1,
                    Err(e) => {
                        tracing::debug!(error = %e, "subscriber dropped");
                        *slot = SubscriberSlot::Tombstone;
                    }
                }
            }
        }

        delivered
    }

    /// Close every still-active subscriber channel
    ///
    /// Called once at publisher exit.
    pub async fn shutdown(&mut self) {
        for slot in self.slots.iter_mut() {
            if let SubscriberSlot::Active(writer) = slot {
                let _ = writer.shutdown().await;
                *slot = SubscriberSlot::Tombstone;
            }
        }
    }

    /// Number of active subscribers
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Number of slots, tombstones included
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Current tracked slot capacity
    pub fn capacity(&self) -> usize {
        self.cap
    }
}
