//! UseCase errors.

use thiserror::Error;

use crate::{domain::DeliveryError, infrastructure::dto::websocket::PayloadError};

/// Failure while admitting a new connection.
#[derive(Debug, Error)]
pub enum JoinError {
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to deliver history: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Failure while handling one inbound submission. The submission is dropped.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("append/broadcast task failed: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}
