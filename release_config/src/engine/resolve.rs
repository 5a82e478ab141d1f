//! Resolution of value assignments against the retained declarations.

use std::collections::HashMap;

use tracing::trace;

use super::dedup::DeclarationSet;
use crate::error::{ReleaseConfigError, ReleaseConfigResult};
use crate::value::{FlagValue, ValueAssignment};

/// Value a flag resolved to, with the chain of sites that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedValue {
    pub(crate) value: FlagValue,
    pub(crate) set_in: String,
}

impl ResolvedValue {
    fn seed(value: FlagValue, assignment: &ValueAssignment) -> Self {
        Self {
            value,
            set_in: assignment.set_in().to_owned(),
        }
    }

    /// Concatenate a later assignment, space separated.
    fn append(&mut self, next: FlagValue, assignment: &ValueAssignment) -> ReleaseConfigResult<()> {
        let mismatch = |found| ReleaseConfigError::AppendTypeMismatch {
            name: assignment.name().to_owned(),
            set_in: assignment.set_in().to_owned(),
            found,
        };
        match (&mut self.value, next) {
            (FlagValue::String(accumulated), FlagValue::String(addition)) => {
                accumulated.push(' ');
                accumulated.push_str(&addition);
                self.set_in.push(' ');
                self.set_in.push_str(assignment.set_in());
                Ok(())
            }
            (FlagValue::String(_), other) => Err(mismatch(other.kind())),
            (other, _) => Err(mismatch(other.kind())),
        }
    }
}

/// Walk the assignments in order, applying append or replace semantics.
pub(crate) fn resolve_values<'a>(
    declarations: &DeclarationSet<'a>,
    all_values: &'a [ValueAssignment],
) -> ReleaseConfigResult<HashMap<&'a str, ResolvedValue>> {
    let mut resolved: HashMap<&'a str, ResolvedValue> = HashMap::new();
    for assignment in all_values {
        let name = assignment.name();
        let Some(flag) = declarations.get(name) else {
            return Err(ReleaseConfigError::UndeclaredFlagValue {
                name: name.to_owned(),
                set_in: assignment.set_in().to_owned(),
            });
        };
        let value = FlagValue::try_from(assignment.value()).map_err(|found| {
            ReleaseConfigError::InvalidValue {
                name: name.to_owned(),
                set_in: assignment.set_in().to_owned(),
                found,
            }
        })?;
        trace!(
            flag = name,
            set_in = assignment.set_in(),
            appends = flag.appends(),
            "applying value"
        );
        if flag.appends()
            && let Some(existing) = resolved.get_mut(name)
        {
            existing.append(value, assignment)?;
            continue;
        }
        resolved.insert(name, ResolvedValue::seed(value, assignment));
    }
    Ok(resolved)
}
