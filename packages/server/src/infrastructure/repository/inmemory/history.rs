//! In-memory `HistoryRepository` implementation.
//!
//! Keeps the `HistoryLog` domain entity behind a mutex. Nothing is persisted;
//! the log starts empty at process start.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, HistoryLog, HistoryRepository};

/// In-memory history repository.
pub struct InMemoryHistoryRepository {
    log: Arc<Mutex<HistoryLog>>,
}

impl InMemoryHistoryRepository {
    pub fn new(log: Arc<Mutex<HistoryLog>>) -> Self {
        Self { log }
    }

    /// Create a repository over an empty log of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Arc::new(Mutex::new(HistoryLog::with_capacity(capacity))))
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn snapshot(&self) -> Vec<ChatMessage> {
        self.log.lock().await.snapshot()
    }

    async fn append(&self, message: ChatMessage) -> usize {
        let mut log = self.log.lock().await;
        let evicted = log.push(message);
        if evicted > 0 {
            tracing::debug!(
                "Evicted {} message(s) from history (capacity {})",
                evicted,
                log.capacity()
            );
        }
        evicted
    }

    async fn count(&self) -> usize {
        self.log.lock().await.len()
    }
}
