//! Utilities shared by the Huddle packages: logging setup and clock abstraction.

pub mod logger;
pub mod time;
