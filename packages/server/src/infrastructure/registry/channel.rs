//! Channel-backed `ConnectionRegistry`.
//!
//! Each registered connection owns a bounded `mpsc::Sender<String>` whose
//! receiver is drained by that socket's writer task (`ui/handler/websocket.rs`).
//! Fan-out only enqueues with `try_send`, so the registry lock is never held
//! across network I/O and a connection closing mid-broadcast only turns into a
//! skipped delivery.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Connection, ConnectionId, ConnectionRegistry, ConnectionState, DeliveryError,
};

/// In-process registry of live connections.
#[derive(Debug, Default)]
pub struct ChannelConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, Connection>>,
}

impl ChannelConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for ChannelConnectionRegistry {
    async fn register(&self, connection: Connection) {
        let mut connections = self.connections.lock().await;
        let id = connection.id();
        connections.insert(id, connection);
        tracing::debug!(
            "Connection '{}' registered ({} live)",
            id,
            connections.len()
        );
    }

    async fn unregister(&self, connection_id: &ConnectionId) -> bool {
        let mut connections = self.connections.lock().await;
        let removed = connections.remove(connection_id).is_some();
        if removed {
            tracing::debug!(
                "Connection '{}' unregistered ({} live)",
                connection_id,
                connections.len()
            );
        }
        removed
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        payload: &str,
    ) -> Result<(), DeliveryError> {
        let connections = self.connections.lock().await;
        let connection = connections
            .get(connection_id)
            .ok_or(DeliveryError::ConnectionNotFound(*connection_id))?;
        connection.deliver(payload)
    }

    async fn broadcast(&self, payload: &str) -> usize {
        let connections = self.connections.lock().await;

        let mut delivered = 0;
        for connection in connections.values() {
            match connection.state() {
                ConnectionState::Open => {}
                ConnectionState::Backlogged => {
                    tracing::warn!(
                        "Skipping broadcast: connection '{}' is backlogged",
                        connection.id()
                    );
                    continue;
                }
                ConnectionState::Closed => {
                    tracing::debug!(
                        "Skipping broadcast: connection '{}' is closed",
                        connection.id()
                    );
                    continue;
                }
            }

            // the queue can still fill between the check and the send;
            // a failed delivery only skips this connection
            match connection.deliver(payload) {
                Ok(()) => delivered += 1,
                Err(e @ DeliveryError::Backlogged(_)) => {
                    tracing::warn!("Skipping broadcast: {}", e);
                }
                Err(e) => {
                    tracing::debug!("Skipping broadcast: {}", e);
                }
            }
        }

        delivered
    }

    async fn count(&self) -> usize {
        self.connections.lock().await.len()
    }
}
