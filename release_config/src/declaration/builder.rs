//! Builder that validates flag declarations.
//!
//! The builder collects caller-supplied fields in their raw form and checks
//! them in a fixed order when [`FlagDeclarationBuilder::build`] is called, so
//! the first rule violated determines the reported error.

use serde_json::Value;
use tracing::trace;

use super::FlagDeclaration;
use crate::constants::{ALL_PARTITIONS_TAG, FLAG_PREFIX, NAME_WHITESPACE};
use crate::error::{ReleaseConfigError, ReleaseConfigResult};
use crate::partition::{Partition, PartitionTag};
use crate::value::FlagValue;

/// Builder for [`FlagDeclaration`].
///
/// # Examples
///
/// ```rust
/// use release_config::{FlagDeclaration, FlagValue, PartitionTag};
///
/// let flag = FlagDeclaration::builder("RELEASE_FOO")
///     .partitions(["product"])
///     .default_value(false)
///     .declared_in("build/release/flags.scl")
///     .build()?;
///
/// assert_eq!(flag.default(), &FlagValue::Bool(false));
/// assert_eq!(flag.partitions()[0].as_str(), "product");
/// assert!(!flag.appends());
/// # Ok::<_, release_config::ReleaseConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FlagDeclarationBuilder {
    name: String,
    partitions: Vec<String>,
    default: Value,
    appends: bool,
    declared_in: String,
}

impl FlagDeclarationBuilder {
    /// Creates a builder for the flag called `name`.
    ///
    /// The default starts out absent, the flag does not append and the
    /// declaration site is empty until set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partitions: Vec::new(),
            default: Value::Null,
            appends: false,
            declared_in: String::new(),
        }
    }

    /// Sets the partition tags owning the flag.
    #[must_use]
    pub fn partitions<I, S>(mut self, partitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partitions = partitions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value used when no assignment overrides the flag.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Makes later assignments accumulate instead of replacing each other.
    #[must_use]
    pub const fn appends(mut self, appends: bool) -> Self {
        self.appends = appends;
        self
    }

    /// Records where the flag was declared.
    #[must_use]
    pub fn declared_in(mut self, location: impl Into<String>) -> Self {
        self.declared_in = location.into();
        self
    }

    /// Validates the collected fields and produces the declaration.
    ///
    /// # Errors
    ///
    /// Checks run in this order, each reported as its own variant:
    /// [`ReleaseConfigError::EmptyPartitions`],
    /// [`ReleaseConfigError::BadNamePrefix`],
    /// [`ReleaseConfigError::WhitespaceInName`],
    /// [`ReleaseConfigError::InvalidPartition`] and
    /// [`ReleaseConfigError::InvalidDefaultType`].
    pub fn build(self) -> ReleaseConfigResult<FlagDeclaration> {
        if self.partitions.is_empty() {
            return Err(ReleaseConfigError::EmptyPartitions { name: self.name });
        }
        if !self.name.starts_with(FLAG_PREFIX) {
            return Err(ReleaseConfigError::BadNamePrefix { name: self.name });
        }
        if self.name.contains(NAME_WHITESPACE) {
            return Err(ReleaseConfigError::WhitespaceInName { name: self.name });
        }
        let partitions = parse_partitions(&self.name, &self.partitions)?;
        let default = FlagValue::try_from(&self.default).map_err(|found| {
            ReleaseConfigError::InvalidDefaultType {
                name: self.name.clone(),
                found,
            }
        })?;
        trace!(flag = %self.name, declared_in = %self.declared_in, "flag declared");
        Ok(FlagDeclaration {
            name: self.name,
            partitions,
            default,
            appends: self.appends,
            declared_in: self.declared_in,
        })
    }
}

fn parse_partitions(name: &str, raw: &[String]) -> ReleaseConfigResult<Vec<PartitionTag>> {
    raw.iter()
        .map(|tag| {
            if tag == ALL_PARTITIONS_TAG {
                if raw.len() > 1 {
                    return Err(ReleaseConfigError::all_combined(name, raw));
                }
                return Ok(PartitionTag::All);
            }
            tag.parse::<Partition>()
                .map(PartitionTag::Only)
                .map_err(|_| ReleaseConfigError::unknown_partition(name, tag))
        })
        .collect()
}
