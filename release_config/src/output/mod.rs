//! The resolved variable set handed to the build system.

pub mod keys;

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::constants::ALL_FLAGS_KEY;
use crate::partition::Partition;
use crate::value::FlagValue;

pub use keys::FlagField;

/// Flat mapping from variable key to value.
///
/// Keys iterate in lexicographic order, so two merges over the same inputs
/// serialise identically.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedVariables(BTreeMap<String, FlagValue>);

impl ResolvedVariables {
    pub(crate) fn insert(&mut self, key: String, value: FlagValue) {
        self.0.insert(key, value);
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.0.get(key)
    }

    /// Formatted value of `flag`.
    #[must_use]
    pub fn value_of(&self, flag: &str) -> Option<&FlagValue> {
        self.get(flag)
    }

    /// One bookkeeping entry of `flag`.
    #[must_use]
    pub fn field(&self, flag: &str, field: FlagField) -> Option<&FlagValue> {
        self.get(&keys::flag_key(flag, field))
    }

    /// Where the value of `flag` came from.
    #[must_use]
    pub fn set_in(&self, flag: &str) -> Option<&str> {
        self.field(flag, FlagField::SetIn).and_then(FlagValue::as_str)
    }

    /// Every declared flag name, sorted.
    #[must_use]
    pub fn all_flags(&self) -> Vec<&str> {
        self.get(ALL_FLAGS_KEY)
            .map(FlagValue::as_string_list)
            .unwrap_or_default()
    }

    /// Flags owned by `partition`, in declaration order.
    ///
    /// Partitions no flag reached have no roster and yield an empty list.
    #[must_use]
    pub fn partition_roster(&self, partition: Partition) -> Vec<&str> {
        self.get(&keys::partition_key(partition))
            .map(FlagValue::as_string_list)
            .unwrap_or_default()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no variables were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, FlagValue> {
        self.0.iter()
    }

    /// Consume the set and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, FlagValue> {
        self.0
    }
}

impl IntoIterator for ResolvedVariables {
    type Item = (String, FlagValue);
    type IntoIter = btree_map::IntoIter<String, FlagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedVariables {
    type Item = (&'a String, &'a FlagValue);
    type IntoIter = btree_map::Iter<'a, String, FlagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
