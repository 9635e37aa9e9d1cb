//! UI layer: HTTP/WebSocket surface of the relay.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::{Server, ServerConfig};
pub use signal::shutdown_signal;
