//! Recursive structural matcher.

use serde_json::{Map, Value};

use crate::schema::{DictSchema, ListSchema};
use crate::{JsonPath, Kind, PathSegment, Schema, SchemaError, SchemaErrorKind};

/// Validate `records` against `schema`, stopping at the first mismatch.
///
/// # Errors
///
/// Returns a [`SchemaError`] carrying the path of the offending element and
/// the nature of the mismatch.
///
/// # Examples
///
/// ```rust
/// use release_config_schema::{Schema, SchemaErrorKind, validate};
/// use serde_json::json;
///
/// let tags = Schema::unique_list_of(Schema::string());
/// let err = validate(&json!(["a", "b", "a"]), &tags).unwrap_err();
/// assert_eq!(err.path().to_string(), "[2]");
/// assert!(matches!(err.kind(), SchemaErrorKind::DuplicateEntry { .. }));
/// ```
pub fn validate(records: &Value, schema: &Schema) -> Result<(), SchemaError> {
    check(records, schema, &mut JsonPath::root())
}

fn check(value: &Value, schema: &Schema, path: &mut JsonPath) -> Result<(), SchemaError> {
    match schema {
        Schema::Any => Ok(()),
        Schema::Type(kind) => check_kind(value, *kind, path),
        Schema::Choice(choices) => {
            if choices.contains(value) {
                Ok(())
            } else {
                Err(SchemaError::new(
                    path,
                    SchemaErrorKind::NotAChoice {
                        value: value.clone(),
                        choices: choices.clone(),
                    },
                ))
            }
        }
        Schema::Union(alternatives) => check_union(value, alternatives, schema, path),
        Schema::List(list) => check_list(value, list, path),
        Schema::Dict(dict) => check_dict(value, dict, path),
    }
}

fn check_kind(value: &Value, expected: Kind, path: &JsonPath) -> Result<(), SchemaError> {
    let found = Kind::of(value);
    if found == expected {
        Ok(())
    } else {
        Err(SchemaError::new(
            path,
            SchemaErrorKind::TypeMismatch { expected, found },
        ))
    }
}

fn check_union(
    value: &Value,
    alternatives: &[Schema],
    union: &Schema,
    path: &mut JsonPath,
) -> Result<(), SchemaError> {
    if alternatives
        .iter()
        .any(|alternative| check(value, alternative, path).is_ok())
    {
        return Ok(());
    }
    Err(SchemaError::new(
        path,
        SchemaErrorKind::NoUnionMatch {
            found: Kind::of(value),
            expected: union.to_string(),
        },
    ))
}

fn check_list(value: &Value, list: &ListSchema, path: &mut JsonPath) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return check_kind(value, Kind::List, path);
    };
    for (index, item) in items.iter().enumerate() {
        path.descend(PathSegment::Index(index), |nested| {
            if let Some(item_schema) = list.item() {
                check(item, item_schema, nested)?;
            }
            if list.is_unique() && items.iter().take(index).any(|earlier| earlier == item) {
                return Err(SchemaError::new(
                    nested,
                    SchemaErrorKind::DuplicateEntry {
                        value: item.clone(),
                    },
                ));
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn check_dict(value: &Value, dict: &DictSchema, path: &mut JsonPath) -> Result<(), SchemaError> {
    let Value::Object(entries) = value else {
        return check_kind(value, Kind::Dict, path);
    };
    check_required_keys(entries, dict, path)?;
    for (key, entry) in entries {
        if dict.required.contains_key(key) {
            continue;
        }
        let Some(entry_schema) = dict.optional.get(key) else {
            return Err(SchemaError::new(
                path,
                SchemaErrorKind::UnknownKey { key: key.clone() },
            ));
        };
        path.descend(PathSegment::Key(key.clone()), |nested| {
            check(entry, entry_schema, nested)
        })?;
    }
    Ok(())
}

fn check_required_keys(
    entries: &Map<String, Value>,
    dict: &DictSchema,
    path: &mut JsonPath,
) -> Result<(), SchemaError> {
    for (key, key_schema) in &dict.required {
        let Some(entry) = entries.get(key) else {
            return Err(SchemaError::new(
                path,
                SchemaErrorKind::MissingKey { key: key.clone() },
            ));
        };
        path.descend(PathSegment::Key(key.clone()), |nested| {
            check(entry, key_schema, nested)
        })?;
    }
    Ok(())
}
