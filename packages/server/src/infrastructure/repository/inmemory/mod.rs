//! In-memory repositories. Contents live for the process lifetime only.

pub mod history;

pub use history::InMemoryHistoryRepository;
