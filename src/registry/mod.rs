//! Subscriber registry for frame fan-out
//!
//! The registry tracks the set of currently connected subscriber channels
//! and broadcasts each completed frame to all of them in slot order.
//!
//! # Architecture
//!
//! ```text
//!     stdin ──► ChunkBuffer ──► FrameSplitter
//!                                    │ frame (Bytes)
//!                                    ▼
//!                          SubscriberRegistry
//!                    ┌───────────────────────────┐
//!                    │ slots: [Active, Tombstone, │
//!                    │         Active, ...]       │
//!                    └───────┬───────────┬───────┘
//!                            ▼           ▼
//!                      [Subscriber] [Subscriber]
//!                       write_all    write_all
//! ```
//!
//! A slot whose write fails becomes a tombstone within the same fan-out
//! pass; the slot is reused by the next accepted connection, so the store
//! does not grow under subscriber churn. Fan-out is insertion order with
//! tombstone gaps skipped, which keeps delivery order deterministic.

pub mod slot;
pub mod store;

pub use slot::SubscriberSlot;
pub use store::SubscriberRegistry;
