//! Shorthands for declarations and assignments used across test suites.
//!
//! Provenance strings are derived from the flag name so assertions can
//! predict them: a declaration of `RELEASE_FOO` is declared in
//! `flags/RELEASE_FOO.scl`.

use anyhow::{Context, Result};
use release_config::serde_json::Value;
use release_config::{FlagDeclaration, ValueAssignment};

/// Declaration site recorded by [`declare`] for `name`.
#[must_use]
pub fn declaration_site(name: &str) -> String {
    format!("flags/{name}.scl")
}

/// Declares a non-appending flag.
///
/// # Errors
///
/// Returns the builder's error, with the flag name as context.
pub fn declare<V: Into<Value>>(name: &str, partitions: &[&str], default: V) -> Result<FlagDeclaration> {
    declare_with(name, partitions, default, false)
}

/// Declares an appending flag.
///
/// # Errors
///
/// Returns the builder's error, with the flag name as context.
pub fn declare_appending<V: Into<Value>>(
    name: &str,
    partitions: &[&str],
    default: V,
) -> Result<FlagDeclaration> {
    declare_with(name, partitions, default, true)
}

fn declare_with<V: Into<Value>>(
    name: &str,
    partitions: &[&str],
    default: V,
    appends: bool,
) -> Result<FlagDeclaration> {
    FlagDeclaration::new(
        name,
        partitions.iter().copied(),
        default,
        appends,
        declaration_site(name),
    )
    .with_context(|| format!("declaring {name}"))
}

/// Assigns `value` to `name` at `set_in`.
#[must_use]
pub fn assign<V: Into<Value>>(name: &str, value: V, set_in: &str) -> ValueAssignment {
    ValueAssignment::new(name, value, set_in)
}
