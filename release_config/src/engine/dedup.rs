//! Reconciliation of redundant declarations.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::declaration::FlagDeclaration;
use crate::error::{ReleaseConfigError, ReleaseConfigResult};

/// Declarations retained for a merge, first occurrence per name.
#[derive(Debug, Default)]
pub(crate) struct DeclarationSet<'a> {
    ordered: Vec<&'a FlagDeclaration>,
    by_name: HashMap<&'a str, &'a FlagDeclaration>,
}

impl<'a> DeclarationSet<'a> {
    /// Keep the first declaration of each name.
    ///
    /// A later declaration of the same name is dropped when it has the same
    /// shape as the retained one, and rejected otherwise.
    pub(crate) fn collect(all_flags: &'a [FlagDeclaration]) -> ReleaseConfigResult<Self> {
        let mut set = Self::default();
        for flag in all_flags {
            if let Some(first) = set.by_name.get(flag.name()).copied() {
                if !first.same_shape(flag) {
                    return Err(ReleaseConfigError::duplicate_declaration(first, flag));
                }
                debug!(
                    flag = flag.name(),
                    declared_in = flag.declared_in(),
                    first_declared_in = first.declared_in(),
                    "skipping redundant declaration"
                );
                continue;
            }
            trace!(flag = flag.name(), "retaining declaration");
            set.by_name.insert(flag.name(), flag);
            set.ordered.push(flag);
        }
        Ok(set)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'a FlagDeclaration> {
        self.by_name.get(name).copied()
    }

    /// Retained declarations in first-seen order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &'a FlagDeclaration> + '_ {
        self.ordered.iter().copied()
    }

    pub(crate) const fn len(&self) -> usize {
        self.ordered.len()
    }
}
