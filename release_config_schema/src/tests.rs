//! Unit tests for the structural matcher.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::{DictSchema, Kind, Schema, SchemaErrorKind, validate};

#[fixture]
fn record_schema() -> Schema {
    Schema::list_of(Schema::from(
        DictSchema::new()
            .required("name", Schema::string())
            .required(
                "tags",
                Schema::unique_list_of(Schema::choice(["a", "b", "c"])),
            )
            .required("value", Schema::kinds([Kind::Null, Kind::Int, Kind::String]))
            .optional("enabled", Schema::boolean()),
    ))
}

#[rstest]
#[case::minimal(json!([{ "name": "x", "tags": ["a"], "value": null }]))]
#[case::optional_present(json!([{ "name": "x", "tags": [], "value": 3, "enabled": true }]))]
#[case::several(json!([
    { "name": "x", "tags": ["a", "b"], "value": "s" },
    { "name": "y", "tags": ["c"], "value": -4 },
]))]
#[case::empty(json!([]))]
fn accepts_conforming_records(record_schema: Schema, #[case] records: Value) {
    assert!(validate(&records, &record_schema).is_ok());
}

#[rstest]
#[case::wrong_type(
    json!([{ "name": 1, "tags": [], "value": null }]),
    "[0].name",
)]
#[case::missing_key(json!([{ "name": "x", "value": null }]), "[0]")]
#[case::unknown_key(
    json!([{ "name": "x", "tags": [], "value": null, "extra": 1 }]),
    "[0]",
)]
#[case::bad_choice(
    json!([{ "name": "x", "tags": ["z"], "value": null }]),
    "[0].tags[0]",
)]
#[case::duplicate(
    json!([{ "name": "x", "tags": ["a", "a"], "value": null }]),
    "[0].tags[1]",
)]
#[case::union_miss(
    json!([{ "name": "x", "tags": [], "value": 1.5 }]),
    "[0].value",
)]
#[case::optional_wrong_type(
    json!([{ "name": "x", "tags": [], "value": null, "enabled": "yes" }]),
    "[0].enabled",
)]
#[case::not_a_list(json!({ "name": "x" }), "<root>")]
#[case::second_record(
    json!([
        { "name": "x", "tags": [], "value": null },
        { "name": "y", "tags": [], "value": false },
    ]),
    "[1].value",
)]
fn reports_path_of_first_mismatch(
    record_schema: Schema,
    #[case] records: Value,
    #[case] expected_path: &str,
) {
    let err = validate(&records, &record_schema).expect_err("records should be rejected");
    assert_eq!(err.path().to_string(), expected_path);
}

#[rstest]
fn missing_key_names_the_key(record_schema: Schema) {
    let err = validate(&json!([{ "name": "x", "value": 1 }]), &record_schema)
        .expect_err("missing tags should fail");
    assert_eq!(
        err.kind(),
        &SchemaErrorKind::MissingKey {
            key: String::from("tags")
        }
    );
    assert_eq!(err.to_string(), "[0]: missing required key 'tags'");
}

#[rstest]
fn type_mismatch_reports_both_kinds() {
    let err = validate(&json!("3"), &Schema::int()).expect_err("string is not an int");
    assert_eq!(
        err.kind(),
        &SchemaErrorKind::TypeMismatch {
            expected: Kind::Int,
            found: Kind::String,
        }
    );
}

#[rstest]
fn choice_error_lists_allowed_values() {
    let err = validate(&json!("odm"), &Schema::choice(["product", "vendor"]))
        .expect_err("odm is not allowed");
    assert_eq!(
        err.to_string(),
        r#"<root>: "odm" is not one of ["product", "vendor"]"#
    );
}

#[rstest]
fn union_error_describes_alternatives() {
    let schema = Schema::kinds([Kind::Bool, Kind::String]);
    let err = validate(&json!({}), &schema).expect_err("dict is not allowed");
    assert_eq!(
        err.kind(),
        &SchemaErrorKind::NoUnionMatch {
            found: Kind::Dict,
            expected: String::from("bool | string"),
        }
    );
}

#[rstest]
fn uniqueness_compares_structured_values() {
    let schema = Schema::unique_list_of(Schema::Any);
    assert!(validate(&json!([[1, 2], [2, 1]]), &schema).is_ok());
    assert!(validate(&json!([[1, 2], [1, 2]]), &schema).is_err());
}

#[rstest]
fn untyped_list_accepts_mixed_elements() {
    assert!(validate(&json!([1, "a", null, [true]]), &Schema::list()).is_ok());
}

#[rstest]
#[case(json!(0), Kind::Int)]
#[case(json!(i64::MIN), Kind::Int)]
#[case(json!(i64::MAX), Kind::Int)]
#[case(json!(u64::MAX), Kind::Float)]
#[case(json!(0.5), Kind::Float)]
#[case(json!(null), Kind::Null)]
#[case(json!(false), Kind::Bool)]
fn classifies_numbers_and_scalars(#[case] value: Value, #[case] expected: Kind) {
    assert_eq!(Kind::of(&value), expected);
}

#[rstest]
fn schema_method_delegates_to_validate() {
    assert!(Schema::string().validate(&json!("ok")).is_ok());
}
