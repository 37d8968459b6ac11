//! Storage module for local persistence
//!
//! Provides a minimal key-value store abstraction with file-backed and
//! in-memory implementations, plus typed JSON collections layered on top.

mod json_collection;
mod kv_store;

pub use json_collection::{JsonCollection, Storage};
pub use kv_store::{FileKvStore, KeyValueStore, MemoryKvStore, StorageError};
