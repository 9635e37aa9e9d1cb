//! UseCase: message submission
//!
//! ## Flow
//!
//! 1. Parse the raw frame into a `Submission` (malformed frames are rejected
//!    here, before any state is touched)
//! 2. Stamp it into a `ChatMessage` (fresh id, local time)
//! 3. Under the `BroadcastSequencer`: append to history (evicting the oldest
//!    beyond capacity) and broadcast to every registered connection,
//!    the sender included
//!
//! Step 3 runs in its own task. Aborting the caller (the socket reader is
//! aborted when the writer ends) cannot leave a message stored but unsent.

use std::sync::Arc;

use huddle_shared::time::Clock;

use crate::{
    domain::{ChatMessage, ConnectionId, ConnectionRegistry, HistoryRepository, Timestamp},
    infrastructure::dto::websocket::{ServerMessage, parse_submission},
};

use super::{error::SubmitError, sequencer::BroadcastSequencer};

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmittedMessage {
    pub message: ChatMessage,
    /// Connections the message was queued for.
    pub recipients: usize,
    /// Messages evicted from history to make room.
    pub evicted: usize,
}

/// Message submission use case
pub struct SubmitMessageUseCase {
    repository: Arc<dyn HistoryRepository>,
    registry: Arc<dyn ConnectionRegistry>,
    sequencer: Arc<BroadcastSequencer>,
    clock: Arc<dyn Clock>,
}

impl SubmitMessageUseCase {
    pub fn new(
        repository: Arc<dyn HistoryRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        sequencer: Arc<BroadcastSequencer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            registry,
            sequencer,
            clock,
        }
    }

    /// Handle one inbound frame from `from`.
    ///
    /// # Returns
    ///
    /// * `Ok(SubmittedMessage)` - the message was stored and broadcast
    /// * `Err(SubmitError)` - the frame was dropped; history and connections
    ///   are untouched (except `Interrupted`, raised only if the sequence
    ///   task panicked)
    pub async fn execute(
        &self,
        from: &ConnectionId,
        raw: &[u8],
    ) -> Result<SubmittedMessage, SubmitError> {
        let submission = parse_submission(raw)?;
        let message = ChatMessage::new(submission, Timestamp::new(self.clock.now()));
        let payload =
            serde_json::to_string(&ServerMessage::message(&message)).map_err(SubmitError::Encode)?;

        let repository = self.repository.clone();
        let registry = self.registry.clone();
        let sequencer = self.sequencer.clone();
        let stored = message.clone();
        let (evicted, recipients) = tokio::spawn(async move {
            let _turn = sequencer.enter().await;
            let evicted = repository.append(stored).await;
            let recipients = registry.broadcast(&payload).await;
            (evicted, recipients)
        })
        .await?;

        tracing::debug!(
            "Message '{}' from connection '{}' broadcast to {} connection(s)",
            message.id,
            from,
            recipients
        );

        Ok(SubmittedMessage {
            message,
            recipients,
            evicted,
        })
    }
}
