//! UseCase: connection join
//!
//! Registers a new connection and hands it the history snapshot. The snapshot
//! is queued before any broadcast can reach the connection, because both this
//! flow and message submission run under the [`BroadcastSequencer`].

use std::sync::Arc;

use crate::{
    domain::{Connection, ConnectionRegistry, HistoryRepository},
    infrastructure::dto::websocket::ServerMessage,
};

use super::{error::JoinError, sequencer::BroadcastSequencer};

/// Connection join use case
pub struct JoinUseCase {
    repository: Arc<dyn HistoryRepository>,
    registry: Arc<dyn ConnectionRegistry>,
    sequencer: Arc<BroadcastSequencer>,
}

impl JoinUseCase {
    pub fn new(
        repository: Arc<dyn HistoryRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        sequencer: Arc<BroadcastSequencer>,
    ) -> Self {
        Self {
            repository,
            registry,
            sequencer,
        }
    }

    /// Register `connection` and send it the current history.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - number of messages in the delivered snapshot
    /// * `Err(JoinError)` - the snapshot could not be delivered; the connection
    ///   is left unregistered
    pub async fn execute(&self, connection: Connection) -> Result<usize, JoinError> {
        let connection_id = connection.id();
        let _turn = self.sequencer.enter().await;

        let history = self.repository.snapshot().await;
        let payload =
            serde_json::to_string(&ServerMessage::history(&history)).map_err(JoinError::Encode)?;

        self.registry.register(connection).await;
        if let Err(e) = self.registry.push_to(&connection_id, &payload).await {
            self.registry.unregister(&connection_id).await;
            return Err(e.into());
        }

        Ok(history.len())
    }
}
