//! Application services for the matrix collection.

mod store;
mod transfer;

pub use store::{MatrixDeletion, MatrixStore};
