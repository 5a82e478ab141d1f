//! Partition tags a flag can be owned by.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::ALL_PARTITIONS_TAG;

/// A concrete build output scope.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Partition {
    /// `product`.
    Product,
    /// `system`.
    System,
    /// `system_ext`.
    SystemExt,
    /// `vendor`.
    Vendor,
}

impl Partition {
    /// Every concrete partition, in the order `all` expands to.
    pub const ALL: [Self; 4] = [Self::Product, Self::System, Self::SystemExt, Self::Vendor];

    /// Tag used in declarations and output keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::System => "system",
            Self::SystemExt => "system_ext",
            Self::Vendor => "vendor",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no known partition.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown partition tag '{0}'")]
pub struct ParsePartitionError(pub String);

impl FromStr for Partition {
    type Err = ParsePartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|partition| partition.as_str() == s)
            .ok_or_else(|| ParsePartitionError(s.to_owned()))
    }
}

/// A partition entry as written in a declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartitionTag {
    /// The `all` sentinel, expanding to every concrete partition.
    All,
    /// A single concrete partition.
    Only(Partition),
}

impl PartitionTag {
    /// Tag as written in declarations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_PARTITIONS_TAG,
            Self::Only(partition) => partition.as_str(),
        }
    }

    /// Concrete partitions this tag covers.
    ///
    /// ```rust
    /// use release_config::{Partition, PartitionTag};
    ///
    /// assert_eq!(PartitionTag::All.expand().len(), 4);
    /// assert_eq!(
    ///     PartitionTag::Only(Partition::Vendor).expand(),
    ///     vec![Partition::Vendor]
    /// );
    /// ```
    #[must_use]
    pub fn expand(self) -> Vec<Partition> {
        match self {
            Self::All => Partition::ALL.to_vec(),
            Self::Only(partition) => vec![partition],
        }
    }

    /// Every tag accepted in a declaration, sentinel last.
    #[must_use]
    pub fn choices() -> Vec<&'static str> {
        Partition::ALL
            .iter()
            .map(|partition| partition.as_str())
            .chain([ALL_PARTITIONS_TAG])
            .collect()
    }
}

impl fmt::Display for PartitionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Partition> for PartitionTag {
    fn from(partition: Partition) -> Self {
        Self::Only(partition)
    }
}

impl FromStr for PartitionTag {
    type Err = ParsePartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_PARTITIONS_TAG {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}
