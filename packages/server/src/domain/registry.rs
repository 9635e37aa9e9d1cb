//! ConnectionRegistry trait definition.
//!
//! Set of live connections and best-effort fan-out. The concrete
//! implementation lives in the infrastructure layer.

use async_trait::async_trait;

use super::{Connection, ConnectionId, DeliveryError};

/// Tracks live connections and delivers payloads to them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Add a connection; it becomes eligible for broadcast delivery.
    async fn register(&self, connection: Connection);

    /// Remove a connection. Returns `false` (and does nothing) when it was
    /// never registered.
    async fn unregister(&self, connection_id: &ConnectionId) -> bool;

    /// Queue a payload for a single connection.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        payload: &str,
    ) -> Result<(), DeliveryError>;

    /// Queue a payload for every registered connection that is ready.
    ///
    /// Backlogged and closed connections are skipped. Returns the number of
    /// connections the payload was queued for.
    async fn broadcast(&self, payload: &str) -> usize;

    /// Number of registered connections.
    async fn count(&self) -> usize;
}
