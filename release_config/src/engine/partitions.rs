//! Partition index construction.

use std::collections::BTreeMap;

use super::dedup::DeclarationSet;
use crate::error::{ReleaseConfigError, ReleaseConfigResult};
use crate::partition::{Partition, PartitionTag};

/// Flag names per concrete partition, in declaration order.
///
/// Only partitions that received at least one flag have an entry. Names are
/// appended as encountered and never collapsed.
#[derive(Debug, Default)]
pub(crate) struct PartitionIndex<'a>(BTreeMap<Partition, Vec<&'a str>>);

impl<'a> PartitionIndex<'a> {
    pub(crate) fn build(declarations: &DeclarationSet<'a>) -> ReleaseConfigResult<Self> {
        let mut index = Self::default();
        for flag in declarations.iter() {
            let tags = flag.partitions();
            for tag in tags {
                if *tag == PartitionTag::All && tags.len() > 1 {
                    let raw: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
                    return Err(ReleaseConfigError::all_combined(flag.name(), &raw));
                }
                for partition in tag.expand() {
                    index.0.entry(partition).or_default().push(flag.name());
                }
            }
        }
        Ok(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Partition, &[&'a str])> + '_ {
        self.0
            .iter()
            .map(|(partition, names)| (*partition, names.as_slice()))
    }
}
