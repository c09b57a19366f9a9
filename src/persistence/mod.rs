//! Snapshot persistence for the task and matrix stores.
//!
//! Each store is saved as one JSON document under its own storage key, so
//! the legacy task snapshot and the matrix snapshot can evolve separately.
//! Storage backends implement [`SnapshotStore`]; [`codec`] turns store
//! contents into documents and back.

pub mod adapters;
pub mod codec;
mod config;
pub mod ports;


pub use config::{DEFAULT_MATRIX_KEY, DEFAULT_TASK_KEY, StorageConfig};
pub use ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
