//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. It backs the
//! handler tests and local runs with `--storage memory`.

mod repository;

pub use repository::InMemoryRepository;
