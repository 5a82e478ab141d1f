//! Output key naming.
//!
//! Downstream consumers read these keys verbatim, so their spelling is part
//! of the public contract.

use crate::constants::ALL_FLAGS_KEY;
use crate::partition::Partition;

/// Per-flag bookkeeping entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FlagField {
    /// Declared partition tags.
    Partitions,
    /// Formatted default.
    Default,
    /// Formatted resolved value.
    Value,
    /// Declaration site.
    DeclaredIn,
    /// Assignment site chain, or the declaration site when never assigned.
    SetIn,
}

impl FlagField {
    /// Every field, in emission order.
    pub const ALL: [Self; 5] = [
        Self::Partitions,
        Self::Default,
        Self::Value,
        Self::DeclaredIn,
        Self::SetIn,
    ];

    /// Key suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Partitions => "PARTITIONS",
            Self::Default => "DEFAULT",
            Self::Value => "VALUE",
            Self::DeclaredIn => "DECLARED_IN",
            Self::SetIn => "SET_IN",
        }
    }
}

/// Key of the roster of flags on `partition`.
///
/// ```rust
/// use release_config::{Partition, keys};
///
/// assert_eq!(
///     keys::partition_key(Partition::SystemExt),
///     "_ALL_RELEASE_FLAGS.PARTITIONS.system_ext"
/// );
/// ```
#[must_use]
pub fn partition_key(partition: Partition) -> String {
    format!("{ALL_FLAGS_KEY}.PARTITIONS.{}", partition.as_str())
}

/// Key of one bookkeeping entry for `flag`.
///
/// ```rust
/// use release_config::{FlagField, keys};
///
/// assert_eq!(
///     keys::flag_key("RELEASE_FOO", FlagField::SetIn),
///     "_ALL_RELEASE_FLAGS.RELEASE_FOO.SET_IN"
/// );
/// ```
#[must_use]
pub fn flag_key(flag: &str, field: FlagField) -> String {
    format!("{ALL_FLAGS_KEY}.{flag}.{}", field.suffix())
}
