//! WebSocket message DTOs.
//!
//! Server to client envelopes carry a `type` discriminator: `"history"` once on
//! join, `"message"` for each broadcast chat message. Client submissions carry
//! `{ user?, text }` and any `type` they send is ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Submission;

/// Wire form of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub id: String,
    pub user: String,
    pub text: String,
    pub timestamp: String,
}

/// Envelope sent from the server to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// History snapshot, oldest first.
    History { messages: Vec<ChatMessageDto> },
    /// A single broadcast chat message.
    Message(ChatMessageDto),
}

/// Submission sent by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionDto {
    #[serde(default)]
    pub user: Option<String>,
    pub text: String,
}

/// Inbound payload that could not be turned into a submission.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("submission is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("malformed submission: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a raw frame into a validated submission.
///
/// Accepts UTF-8 JSON from either text or binary frames.
pub fn parse_submission(raw: &[u8]) -> Result<Submission, PayloadError> {
    let text = std::str::from_utf8(raw)?;
    let dto: SubmissionDto = serde_json::from_str(text)?;
    Ok(dto.into())
}
