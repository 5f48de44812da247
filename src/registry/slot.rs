//! Registry slot states

/// A single slot in the subscriber registry
///
/// Every slot holds either a live subscriber channel or a tombstone left
/// behind by a dead one. Tombstones keep slot indices stable during a
/// fan-out pass and mark the slot as eligible for reuse.
#[derive(Debug)]
pub enum SubscriberSlot<W> {
    /// Connected subscriber receiving frames
    Active(W),
    /// Dead subscriber; slot may be reused by a future accept
    Tombstone,
}

impl<W> SubscriberSlot<W> {
    /// Check whether the slot holds a live subscriber
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriberSlot::Active(_))
    }

    /// Check whether the slot is reusable
    pub fn is_tombstone(&self) -> bool {
        matches!(self, SubscriberSlot::Tombstone)
    }
}
