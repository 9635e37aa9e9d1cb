//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatMessage, MessageText, Submission, UserName};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::SubmissionDto> for Submission {
    fn from(dto: dto::SubmissionDto) -> Self {
        Self {
            user: UserName::from_optional(dto.user),
            text: MessageText::new(dto.text),
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ChatMessage> for dto::ChatMessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            id: model.id.to_string(),
            user: model.user.as_str().to_string(),
            text: model.text.as_str().to_string(),
            timestamp: model.timestamp.to_display_string(),
        }
    }
}

impl dto::ServerMessage {
    /// History envelope for the given log contents (oldest first).
    pub fn history(messages: &[ChatMessage]) -> Self {
        Self::History {
            messages: messages.iter().map(Into::into).collect(),
        }
    }

    /// Broadcast envelope for a single message.
    pub fn message(message: &ChatMessage) -> Self {
        Self::Message(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;
    use chrono::{Local, TimeZone};

    fn message(user: &str, text: &str) -> ChatMessage {
        let time = Local
            .with_ymd_and_hms(2024, 6, 15, 15, 4, 5)
            .single()
            .unwrap();
        ChatMessage::new(
            Submission {
                user: UserName::from_optional(Some(user.to_string())),
                text: MessageText::new(text.to_string()),
            },
            Timestamp::new(time),
        )
    }

    #[test]
    fn test_domain_chat_message_to_dto() {
        // テスト項目: ドメインの ChatMessage が DTO に変換される
        // given (前提条件):
        let model = message("alice", "Hello!");

        // when (操作):
        let dto: dto::ChatMessageDto = (&model).into();

        // then (期待する結果):
        assert_eq!(dto.id, model.id.to_string());
        assert_eq!(dto.user, "alice");
        assert_eq!(dto.text, "Hello!");
        assert_eq!(dto.timestamp, "3:04:05 PM");
    }

    #[test]
    fn test_history_keeps_order() {
        // テスト項目: history エンベロープは渡された順序を保つ
        // given (前提条件):
        let messages = vec![message("a", "1"), message("b", "2"), message("c", "3")];

        // when (操作):
        let envelope = dto::ServerMessage::history(&messages);

        // then (期待する結果):
        let dto::ServerMessage::History { messages: dtos } = envelope else {
            panic!("expected history envelope");
        };
        let texts: Vec<&str> = dtos.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_submission_dto_to_domain() {
        // テスト項目: SubmissionDto がドメインの Submission に変換される
        // given (前提条件):
        let dto = dto::SubmissionDto {
            user: Some("bob".to_string()),
            text: "yo".to_string(),
        };

        // when (操作):
        let submission: Submission = dto.into();

        // then (期待する結果):
        assert_eq!(submission.user.as_str(), "bob");
        assert_eq!(submission.text.as_str(), "yo");
    }
}
