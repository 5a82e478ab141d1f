//! Unit tests for declaration validation order and shape comparison.

use release_config_schema::Kind;
use rstest::rstest;
use serde_json::{Value, json};

use super::FlagDeclaration;
use crate::error::ReleaseConfigError;
use crate::partition::{Partition, PartitionTag};
use crate::value::FlagValue;

fn declare(name: &str, partitions: &[&str], default: Value) -> Result<FlagDeclaration, ReleaseConfigError> {
    FlagDeclaration::new(name, partitions.iter().copied(), default, false, "flags.scl:1")
}

#[rstest]
fn builds_valid_declaration() {
    let flag = declare("RELEASE_FOO", &["product", "vendor"], json!("on"))
        .expect("declaration should be valid");
    assert_eq!(flag.name(), "RELEASE_FOO");
    assert_eq!(
        flag.partitions(),
        &[
            PartitionTag::Only(Partition::Product),
            PartitionTag::Only(Partition::Vendor)
        ]
    );
    assert_eq!(flag.default(), &FlagValue::from("on"));
    assert_eq!(flag.declared_in(), "flags.scl:1");
}

#[rstest]
fn builder_defaults_to_absent_non_appending() {
    let flag = FlagDeclaration::builder("RELEASE_BARE")
        .partitions(["all"])
        .build()
        .expect("declaration should be valid");
    assert_eq!(flag.default(), &FlagValue::Absent);
    assert!(!flag.appends());
    assert_eq!(flag.partitions(), &[PartitionTag::All]);
}

#[rstest]
fn empty_partitions_checked_first() {
    let err = declare("bad name", &[], json!(1.5)).expect_err("no partitions");
    assert!(matches!(err, ReleaseConfigError::EmptyPartitions { .. }));
}

#[rstest]
#[case::missing("FOO")]
#[case::empty("")]
#[case::lowercase("release_FOO")]
fn rejects_names_without_prefix(#[case] name: &str) {
    let err = declare(name, &["product"], json!(null)).expect_err("prefix required");
    assert!(matches!(err, ReleaseConfigError::BadNamePrefix { .. }));
}

#[rstest]
fn prefix_checked_before_whitespace() {
    let err = declare("FOO BAR", &["product"], json!(null)).expect_err("prefix first");
    assert!(matches!(err, ReleaseConfigError::BadNamePrefix { ref name } if name == "FOO BAR"));
}

#[rstest]
#[case::space("RELEASE_A B")]
#[case::tab("RELEASE_A\tB")]
#[case::newline("RELEASE_A\n")]
fn rejects_whitespace_in_name(#[case] name: &str) {
    let err = declare(name, &["product"], json!(null)).expect_err("whitespace rejected");
    assert!(matches!(err, ReleaseConfigError::WhitespaceInName { .. }));
}

#[rstest]
#[case::all_first(&["all", "vendor"], "all")]
#[case::all_last(&["system", "all"], "all")]
#[case::unknown(&["product", "odm"], "odm")]
fn rejects_invalid_partitions(#[case] partitions: &[&str], #[case] offending: &str) {
    let err = declare("RELEASE_P", partitions, json!(null)).expect_err("partition rejected");
    match err {
        ReleaseConfigError::InvalidPartition { partition, .. } => assert_eq!(partition, offending),
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn combined_all_message_lists_partitions() {
    let err = declare("RELEASE_P", &["all", "vendor"], json!(null)).expect_err("combined");
    assert_eq!(
        err.to_string(),
        "invalid partition all for flag RELEASE_P: \"all\" can't be combined with other partitions: [all, vendor]"
    );
}

#[rstest]
fn partition_checked_before_default() {
    let err = declare("RELEASE_P", &["odm"], json!({})).expect_err("partition first");
    assert!(matches!(err, ReleaseConfigError::InvalidPartition { .. }));
}

#[rstest]
#[case::float(json!(2.5), Kind::Float)]
#[case::beyond_i64(json!(u64::MAX), Kind::Float)]
#[case::dict(json!({ "a": 1 }), Kind::Dict)]
fn rejects_invalid_default_type(#[case] default: Value, #[case] expected: Kind) {
    let err = declare("RELEASE_D", &["product"], default).expect_err("default rejected");
    match err {
        ReleaseConfigError::InvalidDefaultType { name, found } => {
            assert_eq!(name, "RELEASE_D");
            assert_eq!(found, expected);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn same_shape_ignores_provenance() {
    let first = declare("RELEASE_S", &["product"], json!(true)).expect("valid");
    let second = FlagDeclaration::new("RELEASE_S", ["product"], true, false, "elsewhere.scl")
        .expect("valid");
    assert!(first.same_shape(&second));
    assert_ne!(first, second);
}

#[rstest]
#[case::default(FlagDeclaration::new("RELEASE_S", ["product"], false, false, "b"))]
#[case::partitions(FlagDeclaration::new("RELEASE_S", ["vendor"], true, false, "b"))]
#[case::appends(FlagDeclaration::new("RELEASE_S", ["product"], true, true, "b"))]
fn same_shape_detects_divergence(#[case] other: Result<FlagDeclaration, ReleaseConfigError>) {
    let first = declare("RELEASE_S", &["product"], json!(true)).expect("valid");
    let other = other.expect("valid");
    assert!(!first.same_shape(&other));
}

#[rstest]
fn record_uses_string_tags() {
    let flag = FlagDeclaration::new("RELEASE_R", ["all"], vec!["x"], true, "r.scl").expect("valid");
    assert_eq!(
        flag.to_record(),
        json!({
            "name": "RELEASE_R",
            "partitions": ["all"],
            "default": ["x"],
            "appends": true,
            "declared_in": "r.scl",
        })
    );
}
