//! Modules layer - Infrastructure components
//!
//! Contains the key-value persistence adapters used by the features.

pub mod storage;
