//! HistoryRepository trait definition.
//!
//! Storage seam for the bounded history log.

use async_trait::async_trait;

use super::ChatMessage;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Current history, oldest first.
    async fn snapshot(&self) -> Vec<ChatMessage>;

    /// Append a message, evicting the oldest beyond capacity. Returns the
    /// number of evicted messages.
    async fn append(&self, message: ChatMessage) -> usize;

    /// Number of stored messages.
    async fn count(&self) -> usize;
}
