//! Shared primitives for the rental schema crates.

pub mod error;
pub mod types;
