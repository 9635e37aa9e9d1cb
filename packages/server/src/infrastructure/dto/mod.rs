//! Data Transfer Objects (DTOs) for the relay.
//!
//! - `websocket`: WebSocket envelope DTOs and submission parsing
//! - `conversion`: DTO <-> domain conversions

pub mod conversion;
pub mod websocket;
