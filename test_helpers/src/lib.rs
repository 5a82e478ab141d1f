//! Test helpers shared across crates.
//!
//! The helpers build declarations and assignments with predictable
//! provenance strings, parse literal values written in behavioural scenarios,
//! and assert on resolved variables with `anyhow` errors.

pub mod assertions;
pub mod fixtures;
pub mod text;
