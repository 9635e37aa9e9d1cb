//! Domain entities: chat messages and the bounded history log.

use std::collections::VecDeque;

use super::{MessageId, MessageText, Timestamp, UserName};

/// Default number of messages retained in the history log.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A validated client submission, not yet stamped with id and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user: UserName,
    pub text: MessageText,
}

/// A chat message. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub user: UserName,
    pub text: MessageText,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Stamp a submission with a fresh id and the given creation time.
    pub fn new(submission: Submission, timestamp: Timestamp) -> Self {
        Self {
            id: MessageId::generate(),
            user: submission.user,
            text: submission.text,
            timestamp,
        }
    }
}

/// Ordered, size-capped log of the most recent messages, oldest first.
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message, evicting the oldest entries beyond capacity.
    ///
    /// Returns the number of evicted messages.
    pub fn push(&mut self, message: ChatMessage) -> usize {
        self.messages.push_back(message);
        let mut evicted = 0;
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
