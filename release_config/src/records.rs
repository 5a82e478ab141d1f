//! Ingestion of untyped declaration and assignment records.
//!
//! Build-language evaluators hand over plain lists of dictionaries. These
//! helpers validate such lists against the fixed schemas, then route every
//! declaration through [`FlagDeclarationBuilder`] so the naming and
//! partition rules apply exactly as for typed callers.

use release_config_schema::validate;
use serde::Deserialize;
use serde_json::Value;

use crate::declaration::{FlagDeclaration, FlagDeclarationBuilder};
use crate::engine::release_config;
use crate::error::{RecordList, ReleaseConfigError, ReleaseConfigResult};
use crate::output::ResolvedVariables;
use crate::schemas::{flag_list_schema, value_list_schema};
use crate::value::ValueAssignment;

#[derive(Deserialize)]
struct FlagRecord {
    name: String,
    partitions: Vec<String>,
    default: Value,
    #[serde(default)]
    appends: bool,
    declared_in: String,
}

#[derive(Deserialize)]
struct ValueRecord {
    name: String,
    value: Value,
    set_in: String,
}

/// Validate and build a list of declaration records.
///
/// # Errors
///
/// Returns [`ReleaseConfigError::Schema`] for structural mismatches and any
/// error [`FlagDeclarationBuilder::build`] reports for the first offending
/// record.
///
/// # Examples
///
/// ```rust
/// use release_config::records::declarations_from_records;
/// use serde_json::json;
///
/// let flags = declarations_from_records(&json!([
///     { "name": "RELEASE_FOO", "partitions": ["vendor"], "default": 1, "declared_in": "a.scl" },
/// ]))?;
/// assert_eq!(flags[0].name(), "RELEASE_FOO");
/// # Ok::<_, release_config::ReleaseConfigError>(())
/// ```
pub fn declarations_from_records(records: &Value) -> ReleaseConfigResult<Vec<FlagDeclaration>> {
    validate(records, &flag_list_schema())
        .map_err(|source| ReleaseConfigError::schema(RecordList::Declarations, source))?;
    let decoded = Vec::<FlagRecord>::deserialize(records)
        .map_err(|source| ReleaseConfigError::decode(RecordList::Declarations, source))?;
    decoded
        .into_iter()
        .map(|record| {
            FlagDeclarationBuilder::new(record.name)
                .partitions(record.partitions)
                .default_value(record.default)
                .appends(record.appends)
                .declared_in(record.declared_in)
                .build()
        })
        .collect()
}

/// Validate and build a list of value assignment records.
///
/// # Errors
///
/// Returns [`ReleaseConfigError::Schema`] for structural mismatches.
pub fn assignments_from_records(records: &Value) -> ReleaseConfigResult<Vec<ValueAssignment>> {
    validate(records, &value_list_schema())
        .map_err(|source| ReleaseConfigError::schema(RecordList::Values, source))?;
    let decoded = Vec::<ValueRecord>::deserialize(records)
        .map_err(|source| ReleaseConfigError::decode(RecordList::Values, source))?;
    Ok(decoded
        .into_iter()
        .map(|record| ValueAssignment::new(record.name, record.value, record.set_in))
        .collect())
}

/// Build both lists from records and merge them.
///
/// # Errors
///
/// Propagates every error of [`declarations_from_records`],
/// [`assignments_from_records`] and [`release_config`].
pub fn release_config_from_records(
    flags: &Value,
    values: &Value,
) -> ReleaseConfigResult<ResolvedVariables> {
    let declarations = declarations_from_records(flags)?;
    let assignments = assignments_from_records(values)?;
    release_config(&declarations, &assignments)
}
