//! Persistence host services.
//!
//! # Responsibility
//! - Move document snapshots between the in-memory store and durable
//!   storage (SQLite rows or JSON files).
//! - Keep the store itself free of I/O and logging.

pub mod file_service;
pub mod persistence_service;
