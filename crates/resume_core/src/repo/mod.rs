//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define storage contracts used by the persistence host.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `InvalidKey`) in
//!   addition to DB transport errors.

pub mod snapshot_repo;
