//! The merge engine.
//!
//! A merge runs five stages in order: structural validation of both input
//! lists, reconciliation of redundant declarations, partition indexing,
//! value resolution, and output assembly. Any failure aborts the whole merge.

mod assemble;
mod dedup;
mod partitions;
mod resolve;

use release_config_schema::validate;
use serde_json::Value;
use tracing::debug;

use crate::declaration::FlagDeclaration;
use crate::error::{RecordList, ReleaseConfigError, ReleaseConfigResult};
use crate::output::ResolvedVariables;
use crate::schemas::{flag_list_schema, value_list_schema};
use crate::value::ValueAssignment;

use dedup::DeclarationSet;
use partitions::PartitionIndex;

/// Merge flag declarations and value assignments into the variable set.
///
/// Input order matters: the first declaration of a name supplies its
/// declaration site, and assignments apply in sequence.
///
/// # Errors
///
/// Returns [`ReleaseConfigError::Schema`] when either list fails structural
/// validation, [`ReleaseConfigError::DuplicateFlagDeclaration`] when a flag is
/// declared twice with different shapes,
/// [`ReleaseConfigError::UndeclaredFlagValue`] when a value names no declared
/// flag, and [`ReleaseConfigError::AppendTypeMismatch`] when an appending flag
/// receives a non-string value.
///
/// # Examples
///
/// ```rust
/// use release_config::{FlagDeclaration, ValueAssignment, release_config};
///
/// let flags = [FlagDeclaration::new("RELEASE_BAR", ["all"], "", true, "flags.scl")?];
/// let values = [
///     ValueAssignment::new("RELEASE_BAR", "x", "A"),
///     ValueAssignment::new("RELEASE_BAR", "y", "B"),
/// ];
///
/// let variables = release_config(&flags, &values)?;
/// assert_eq!(variables.value_of("RELEASE_BAR").and_then(|v| v.as_str()), Some("x y"));
/// assert_eq!(variables.set_in("RELEASE_BAR"), Some("A B"));
/// # Ok::<_, release_config::ReleaseConfigError>(())
/// ```
pub fn release_config(
    all_flags: &[FlagDeclaration],
    all_values: &[ValueAssignment],
) -> ReleaseConfigResult<ResolvedVariables> {
    debug!(
        flags = all_flags.len(),
        values = all_values.len(),
        "merging release configuration"
    );
    validate_shapes(all_flags, all_values)?;

    let declarations = DeclarationSet::collect(all_flags)?;
    let partitions = PartitionIndex::build(&declarations)?;
    let resolved = resolve::resolve_values(&declarations, all_values)?;
    let variables = assemble::assemble(&declarations, &partitions, &resolved);

    debug!(
        flags = declarations.len(),
        overridden = resolved.len(),
        variables = variables.len(),
        "release configuration merged"
    );
    Ok(variables)
}

fn validate_shapes(
    all_flags: &[FlagDeclaration],
    all_values: &[ValueAssignment],
) -> ReleaseConfigResult<()> {
    let flag_records = Value::Array(all_flags.iter().map(FlagDeclaration::to_record).collect());
    validate(&flag_records, &flag_list_schema())
        .map_err(|source| ReleaseConfigError::schema(RecordList::Declarations, source))?;

    let value_records = Value::Array(all_values.iter().map(ValueAssignment::to_record).collect());
    validate(&value_records, &value_list_schema())
        .map_err(|source| ReleaseConfigError::schema(RecordList::Values, source))
}
