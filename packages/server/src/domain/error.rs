//! Domain errors.

use thiserror::Error;

use super::ConnectionId;

/// Why a payload could not be queued for one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Connection '{0}' is not registered")]
    ConnectionNotFound(ConnectionId),

    /// The outbound queue is full; the writer is not keeping up.
    #[error("Connection '{0}' is backlogged")]
    Backlogged(ConnectionId),

    #[error("Connection '{0}' is closed")]
    Closed(ConnectionId),
}
