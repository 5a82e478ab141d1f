//! Structural schemas for declaration and assignment records.

use release_config_schema::{Kind, Schema};

use crate::partition::PartitionTag;

/// Kinds a default or an assigned value may take.
pub const VALUE_KINDS: [Kind; 5] = [Kind::Null, Kind::Bool, Kind::List, Kind::String, Kind::Int];

fn value_kinds() -> Schema {
    Schema::kinds(VALUE_KINDS)
}

/// Shape of one flag declaration record.
///
/// `appends` may be omitted and then reads as `false`.
#[must_use]
pub fn flag_schema() -> Schema {
    Schema::dict()
        .required("name", Schema::string())
        .required(
            "partitions",
            Schema::unique_list_of(Schema::choice(PartitionTag::choices())),
        )
        .required("default", value_kinds())
        .optional("appends", Schema::boolean())
        .required("declared_in", Schema::string())
        .into()
}

/// Shape of one value assignment record.
#[must_use]
pub fn value_schema() -> Schema {
    Schema::dict()
        .required("name", Schema::string())
        .required("value", value_kinds())
        .required("set_in", Schema::string())
        .into()
}

/// Shape of the full declaration list.
#[must_use]
pub fn flag_list_schema() -> Schema {
    Schema::list_of(flag_schema())
}

/// Shape of the full assignment list.
#[must_use]
pub fn value_list_schema() -> Schema {
    Schema::list_of(value_schema())
}
