//! Task entity model and the active task collection store.
//!
//! The task context owns the shape of a single task, the five-bin
//! [`domain::TaskState`] a matrix is made of, and the [`services::TaskStore`]
//! that every task-mutation gesture runs against. The module follows the
//! crate's hexagonal layout:
//!
//! - Domain types in [`domain`]
//! - The working-set store and its bulk-move undo slot in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
