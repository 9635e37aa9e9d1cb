//! Connection registry implementations.
//!
//! - `channel`: per-connection bounded mpsc queues drained by socket writer tasks

pub mod channel;

pub use channel::ChannelConnectionRegistry;
