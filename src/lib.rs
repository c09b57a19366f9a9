//! Dcyde: an Eisenhower-matrix task organizer core.
//!
//! Tasks are sorted into four quadrants (do first, schedule, delegate,
//! eliminate) plus an unassigned inbox, and grouped into named matrices.
//! This crate holds everything below the view layer: the task and matrix
//! stores, the reconciliation between them, drag-and-drop geometry and
//! snapshot persistence.
//!
//! # Architecture
//!
//! Dcyde follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task model and the active task store
//! - [`matrix`]: Matrices, summaries, slugs and the matrix store
//! - [`sync`]: Equality-gated copies between the two stores
//! - [`drag`]: Insertion geometry and drag gesture state
//! - [`persistence`]: Snapshot documents and storage backends
//! - [`workspace`]: The application service a UI layer drives

pub mod drag;
pub mod matrix;
pub mod persistence;
pub mod sync;
pub mod task;
pub mod workspace;
