//! Real-time broadcast relay.
//!
//! Clients connect over WebSocket, submit short text messages and receive
//! every message submitted by any connected client, plus a bounded history
//! snapshot when they join.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
