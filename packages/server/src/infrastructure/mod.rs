//! Infrastructure layer: concrete registry and storage, wire DTOs.

pub mod dto;
pub mod registry;
pub mod repository;
