//! Snapshot store backends.

mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::InMemorySnapshotStore;
