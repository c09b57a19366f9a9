//! Domain model for matrices.

mod ids;
mod matrix;
mod name;
mod slug;
mod snapshot;
mod summary;

pub use ids::MatrixId;
pub use matrix::{Matrix, MatrixPatch};
pub use name::{DEFAULT_MATRIX_NAME, MIGRATED_MATRIX_NAME, MatrixName};
pub use slug::generate_slug;
pub use snapshot::MatrixSnapshot;
pub use summary::{MatrixSummary, QuadrantCounts};
