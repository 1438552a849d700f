//! Storage layer for the teamup roster CLI
//!
//! This module provides a clean abstraction over key-value persistence,
//! organized into logical components:
//! - `models`: Data structures
//! - `backend`: The key-value backend trait and key layout
//! - `memory`: In-memory backend for tests and ephemeral use
//! - `sqlite`: Durable SQLite-backed backend
//! - `store`: The `TeamStorage` handle and collection (de)serialization
//! - `players`: Player operations (add, list, remove)
//! - `groups`: Group operations (create, list, remove)

pub mod backend;
pub mod groups;
pub mod memory;
pub mod models;
pub mod players;
pub mod sqlite;
pub mod store;


// Re-export the main types and storage struct for easy access
pub use backend::StorageBackend;
pub use memory::MemoryBackend;
pub use models::PlayerRecord;
pub use sqlite::SqliteBackend;
pub use store::TeamStorage;
