//! History storage implementations.

pub mod inmemory;

pub use inmemory::InMemoryHistoryRepository;
