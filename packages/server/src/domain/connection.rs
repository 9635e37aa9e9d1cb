//! A live client connection as seen by the registry.

use tokio::sync::mpsc::{self, error::TrySendError};

use super::{ConnectionId, DeliveryError};

/// Outbound queue feeding one socket's writer task.
pub type OutboundSender = mpsc::Sender<String>;

/// Liveness of a connection's transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Ready to accept a payload.
    Open,
    /// Outbound queue is full.
    Backlogged,
    /// Writer task is gone; the socket is closing or closed.
    Closed,
}

/// Handle to one connected client.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    sender: OutboundSender,
}

impl Connection {
    pub fn new(id: ConnectionId, sender: OutboundSender) -> Self {
        Self { id, sender }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> ConnectionState {
        if self.sender.is_closed() {
            ConnectionState::Closed
        } else if self.sender.capacity() == 0 {
            ConnectionState::Backlogged
        } else {
            ConnectionState::Open
        }
    }

    /// Queue a payload without waiting. Never blocks on a slow client.
    pub fn deliver(&self, payload: &str) -> Result<(), DeliveryError> {
        self.sender
            .try_send(payload.to_string())
            .map_err(|e| match e {
                TrySendError::Full(_) => DeliveryError::Backlogged(self.id),
                TrySendError::Closed(_) => DeliveryError::Closed(self.id),
            })
    }
}
