//! Error types produced by schema validation.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::{JsonPath, Kind};

/// Why a value failed to match its schema.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SchemaErrorKind {
    /// The value had the wrong primitive kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind demanded by the schema.
        expected: Kind,
        /// Kind actually present.
        found: Kind,
    },

    /// A required dictionary key was absent.
    #[error("missing required key '{key}'")]
    MissingKey {
        /// Name of the absent key.
        key: String,
    },

    /// A dictionary carried a key the schema does not mention.
    #[error("unexpected key '{key}'")]
    UnknownKey {
        /// Name of the unexpected key.
        key: String,
    },

    /// The value was not one of the permitted choices.
    #[error("{value} is not one of {}", Choices(.choices))]
    NotAChoice {
        /// Offending value.
        value: Value,
        /// Values the schema allows.
        choices: Vec<Value>,
    },

    /// No alternative of a union matched.
    #[error("{found} value does not match {expected}")]
    NoUnionMatch {
        /// Kind actually present.
        found: Kind,
        /// Rendering of the union's alternatives.
        expected: String,
    },

    /// A list that must hold distinct entries repeated one.
    #[error("duplicate entry {value}")]
    DuplicateEntry {
        /// The repeated element.
        value: Value,
    },
}

/// A schema mismatch together with where it occurred.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{path}: {kind}")]
pub struct SchemaError {
    path: JsonPath,
    kind: SchemaErrorKind,
}

impl SchemaError {
    pub(crate) fn new(path: &JsonPath, kind: SchemaErrorKind) -> Self {
        Self {
            path: path.clone(),
            kind,
        }
    }

    /// Location of the offending element.
    #[must_use]
    pub const fn path(&self) -> &JsonPath {
        &self.path
    }

    /// Nature of the mismatch.
    #[must_use]
    pub const fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }
}

struct Choices<'a>(&'a [Value]);

impl fmt::Display for Choices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, choice) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{choice}")?;
        }
        f.write_str("]")
    }
}
