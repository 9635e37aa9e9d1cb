//! Domain layer: value objects, entities and the seams the use cases depend on.

pub mod connection;
pub mod entity;
pub mod error;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use connection::{Connection, ConnectionState, OutboundSender};
pub use entity::{ChatMessage, DEFAULT_HISTORY_CAPACITY, HistoryLog, Submission};
pub use error::DeliveryError;
pub use registry::ConnectionRegistry;
pub use repository::HistoryRepository;
pub use value_object::{
    ConnectionId, DEFAULT_USER_NAME, MessageId, MessageText, Timestamp, UserName,
};

#[cfg(test)]
pub use registry::MockConnectionRegistry;
