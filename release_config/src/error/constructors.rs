//! Constructors for `ReleaseConfigError` variants with composed messages.

use release_config_schema::SchemaError;

use super::{RecordList, ReleaseConfigError};
use crate::declaration::FlagDeclaration;
use crate::partition::Partition;

impl ReleaseConfigError {
    /// `all` appeared alongside other partition tags.
    pub(crate) fn all_combined<S: AsRef<str>>(name: &str, partitions: &[S]) -> Self {
        let listed: Vec<&str> = partitions.iter().map(AsRef::as_ref).collect();
        Self::InvalidPartition {
            name: name.to_owned(),
            partition: String::from(crate::constants::ALL_PARTITIONS_TAG),
            detail: format!(
                "\"all\" can't be combined with other partitions: [{}]",
                listed.join(", ")
            ),
        }
    }

    /// A partition tag outside the closed set.
    pub(crate) fn unknown_partition(name: &str, partition: &str) -> Self {
        let allowed: Vec<&str> = Partition::ALL.iter().map(|p| p.as_str()).collect();
        Self::InvalidPartition {
            name: name.to_owned(),
            partition: partition.to_owned(),
            detail: format!("allowed partitions: [{}]", allowed.join(", ")),
        }
    }

    /// A later declaration disagreed with the retained one.
    pub(crate) fn duplicate_declaration(first: &FlagDeclaration, later: &FlagDeclaration) -> Self {
        Self::DuplicateFlagDeclaration {
            name: later.name().to_owned(),
            declared_in: later.declared_in().to_owned(),
            first_declared_in: first.declared_in().to_owned(),
        }
    }

    /// Schema mismatch in the given list.
    pub(crate) const fn schema(list: RecordList, source: SchemaError) -> Self {
        Self::Schema { list, source }
    }

    /// Decoding failure in the given list.
    pub(crate) const fn decode(list: RecordList, source: serde_json::Error) -> Self {
        Self::Decode { list, source }
    }

    /// Returns the flag name the error concerns, when there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use release_config::{FlagDeclaration, ReleaseConfigError};
    ///
    /// let err = FlagDeclaration::builder("RELEASE_X")
    ///     .partitions(["odm"])
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err.flag_name(), Some("RELEASE_X"));
    /// ```
    #[must_use]
    pub fn flag_name(&self) -> Option<&str> {
        match self {
            Self::EmptyPartitions { name }
            | Self::BadNamePrefix { name }
            | Self::WhitespaceInName { name }
            | Self::InvalidPartition { name, .. }
            | Self::InvalidDefaultType { name, .. }
            | Self::DuplicateFlagDeclaration { name, .. }
            | Self::UndeclaredFlagValue { name, .. }
            | Self::AppendTypeMismatch { name, .. }
            | Self::InvalidValue { name, .. } => Some(name),
            Self::Schema { .. } | Self::Decode { .. } => None,
        }
    }
}
