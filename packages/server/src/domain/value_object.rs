//! Value objects of the relay domain.

use std::fmt;

use chrono::{DateTime, Local};
use huddle_shared::time::format_local_time;
use uuid::Uuid;

/// Display name given to submissions that carry no (or an empty) `user`.
pub const DEFAULT_USER_NAME: &str = "Anonymous Fan";

/// Identifies one live connection for the lifetime of its socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Chat message identifier.
///
/// UUID v7: a millisecond timestamp prefix followed by random bits, so ids are
/// practically unique and sort roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name of a message author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Resolve the name sent by a client, falling back to [`DEFAULT_USER_NAME`]
    /// when it is absent or empty.
    pub fn from_optional(raw: Option<String>) -> Self {
        match raw {
            Some(name) if !name.is_empty() => Self(name),
            _ => Self::anonymous(),
        }
    }

    pub fn anonymous() -> Self {
        Self(DEFAULT_USER_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Message body, kept verbatim. Empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Creation time of a message in server-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub fn new(value: DateTime<Local>) -> Self {
        Self(value)
    }

    /// Human-readable wall-clock form, e.g. `3:04:05 PM`.
    pub fn to_display_string(&self) -> String {
        format_local_time(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_defaults_when_absent() {
        // テスト項目: user が無い場合はデフォルト名になる
        // given (前提条件):
        let raw = None;

        // when (操作):
        let name = UserName::from_optional(raw);

        // then (期待する結果):
        assert_eq!(name.as_str(), DEFAULT_USER_NAME);
    }

    #[test]
    fn test_user_name_defaults_when_empty() {
        // テスト項目: 空文字の user はデフォルト名になる
        // given (前提条件):
        let raw = Some(String::new());

        // when (操作):
        let name = UserName::from_optional(raw);

        // then (期待する結果):
        assert_eq!(name, UserName::anonymous());
    }

    #[test]
    fn test_user_name_keeps_whitespace_verbatim() {
        // テスト項目: 空白のみの user はそのまま保持される（トリムしない）
        // given (前提条件):
        let raw = Some("  ".to_string());

        // when (操作):
        let name = UserName::from_optional(raw);

        // then (期待する結果):
        assert_eq!(name.as_str(), "  ");
    }

    #[test]
    fn test_message_ids_are_unique() {
        // テスト項目: 連続して生成した MessageId が重複しない
        // given (前提条件):
        let count = 1_000;

        // when (操作):
        let ids: std::collections::HashSet<MessageId> =
            (0..count).map(|_| MessageId::generate()).collect();

        // then (期待する結果):
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_message_id_is_version_7() {
        // テスト項目: MessageId は時刻成分を含む UUID v7 である
        // given (前提条件):
        let id = MessageId::generate();

        // when (操作):
        let version = Uuid::parse_str(&id.to_string()).unwrap().get_version_num();

        // then (期待する結果):
        assert_eq!(version, 7);
    }

    #[test]
    fn test_empty_message_text_is_accepted() {
        // テスト項目: 空のテキストも拒否されない
        // given (前提条件):
        let raw = String::new();

        // when (操作):
        let text = MessageText::new(raw);

        // then (期待する結果):
        assert_eq!(text.as_str(), "");
    }
}
