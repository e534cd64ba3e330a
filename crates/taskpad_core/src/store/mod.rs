//! Snapshot persistence layer.
//!
//! # Responsibility
//! - Define the key-value store capability injected into the engine.
//! - Encode and decode the task list snapshot.
//!
//! # Invariants
//! - The engine persists exactly one key, [`snapshot_store::SNAPSHOT_KEY`].
//! - Snapshot decoding is whole-or-nothing: one malformed element rejects
//!   the entire value.

pub mod codec;
pub mod snapshot_store;
