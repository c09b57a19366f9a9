//! Named matrices and the collection store that owns them.
//!
//! Each [`domain::Matrix`] wraps its own five-bin task layout. The
//! [`services::MatrixStore`] is the durable source of truth for every matrix
//! and for which one is selected; it also moves tasks between matrices as
//! single, atomic updates.
//!
//! - Domain types in [`domain`]
//! - The collection store in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
