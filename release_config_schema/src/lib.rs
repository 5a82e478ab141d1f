//! Declarative structural schemas for JSON-shaped records.
//!
//! A [`Schema`] describes the expected shape of a [`serde_json::Value`]:
//! primitive kinds, closed choices, unions of alternatives, lists (optionally
//! with set-uniqueness) and dictionaries with required and optional keys.
//! [`validate`] walks a value against a schema and fails fast on the first
//! mismatch, reporting the JSON path of the offending element.
//!
//! ```rust
//! use release_config_schema::{DictSchema, Schema, validate};
//! use serde_json::json;
//!
//! let record = Schema::list_of(Schema::from(
//!     DictSchema::new()
//!         .required("name", Schema::string())
//!         .optional("tags", Schema::unique_list_of(Schema::string())),
//! ));
//!
//! validate(&json!([{ "name": "a", "tags": ["x", "y"] }]), &record)?;
//!
//! let err = validate(&json!([{ "name": 3 }]), &record).unwrap_err();
//! assert_eq!(err.path().to_string(), "[0].name");
//! # Ok::<_, release_config_schema::SchemaError>(())
//! ```

mod error;
mod kind;
mod path;
mod schema;
mod validate;

pub use error::{SchemaError, SchemaErrorKind};
pub use kind::Kind;
pub use path::{JsonPath, PathSegment};
pub use schema::{DictSchema, ListSchema, Schema};
pub use validate::validate;

#[cfg(test)]
mod tests;
