//! Serializes the compound history/fan-out sequences.
//!
//! Held across "snapshot + deliver snapshot + register" when a connection
//! joins and across "append + evict + broadcast" when a message is submitted.
//! A joining connection therefore sees every message exactly once: in its
//! snapshot or as a broadcast.
//!
//! Lock order: sequencer, then history, then registry.

use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct BroadcastSequencer {
    gate: Mutex<()>,
}

impl BroadcastSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access. Released when the guard is dropped.
    pub async fn enter(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
