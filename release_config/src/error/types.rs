//! Primary error enum for release configuration merges.

use std::fmt;

use release_config_schema::{Kind, SchemaError};
use thiserror::Error;

/// Which input list a record-level failure belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordList {
    /// The flag declaration list.
    Declarations,
    /// The value assignment list.
    Values,
}

impl fmt::Display for RecordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Declarations => "flag declarations",
            Self::Values => "value assignments",
        })
    }
}

/// Errors that abort a declaration or a merge.
///
/// Every failure is fatal: the merge never returns a partial result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReleaseConfigError {
    /// A declaration listed no partitions.
    #[error("flag {name} must declare at least one partition")]
    EmptyPartitions {
        /// Flag being declared.
        name: String,
    },

    /// A flag name lacks the reserved prefix.
    #[error("release flag names must start with RELEASE_: \"{name}\"")]
    BadNamePrefix {
        /// Offending flag name.
        name: String,
    },

    /// A flag name contains a space, tab or newline.
    #[error("flag names must not contain whitespace: \"{name}\"")]
    WhitespaceInName {
        /// Offending flag name.
        name: String,
    },

    /// A partition tag was unknown, or `all` was combined with other tags.
    #[error("invalid partition {partition} for flag {name}: {detail}")]
    InvalidPartition {
        /// Flag being declared.
        name: String,
        /// The rejected tag.
        partition: String,
        /// Why the tag was rejected.
        detail: String,
    },

    /// A default value had a kind outside the allowed set.
    #[error("invalid type of default for flag {name} ({found})")]
    InvalidDefaultType {
        /// Flag being declared.
        name: String,
        /// Kind of the rejected value.
        found: Kind,
    },

    /// An input list did not match its structural schema.
    #[error("{list} failed schema validation: {source}")]
    Schema {
        /// List containing the offending record.
        list: RecordList,
        /// Underlying schema mismatch.
        #[source]
        source: SchemaError,
    },

    /// An input list passed validation but could not be decoded.
    #[error("{list} could not be decoded: {source}")]
    Decode {
        /// List containing the offending record.
        list: RecordList,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The same flag was declared twice with different shapes.
    #[error("{declared_in}: duplicate declaration of flag {name} (declared first in {first_declared_in})")]
    DuplicateFlagDeclaration {
        /// Flag declared twice.
        name: String,
        /// Location of the conflicting declaration.
        declared_in: String,
        /// Location of the retained declaration.
        first_declared_in: String,
    },

    /// A value was assigned to a flag nobody declared.
    #[error("{set_in}: value set for undeclared build flag: {name}")]
    UndeclaredFlagValue {
        /// Name the assignment referenced.
        name: String,
        /// Location of the assignment.
        set_in: String,
    },

    /// A value for an appending flag could not be concatenated.
    #[error("{set_in}: flag {name} appends values, which requires strings, but found {found}")]
    AppendTypeMismatch {
        /// Appending flag.
        name: String,
        /// Location of the assignment being appended.
        set_in: String,
        /// Kind that prevented concatenation.
        found: Kind,
    },

    /// An assigned value held a kind outside the allowed set.
    #[error("{set_in}: invalid value for flag {name} ({found})")]
    InvalidValue {
        /// Flag being assigned.
        name: String,
        /// Location of the assignment.
        set_in: String,
        /// Kind of the rejected value.
        found: Kind,
    },
}

/// Result alias used throughout the crate.
pub type ReleaseConfigResult<T> = Result<T, ReleaseConfigError>;
