//! Publisher and subscriber event loops
//!
//! Both loops are single tasks: one `tokio::select!` per iteration is the
//! only suspension point, so buffer and registry access needs no locking.
//! Each loop runs until its shutdown future resolves or its input reaches
//! end-of-stream.

pub mod publisher;
pub mod subscriber;

pub use publisher::Publisher;
pub use subscriber::Subscriber;
