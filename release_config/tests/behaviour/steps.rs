//! Steps for declaring flags, assigning values and checking merged output.

use crate::fixtures::ReleaseContext;
use anyhow::{Result, anyhow, ensure};
use release_config::{
    FlagDeclaration, FlagValue, Partition, ReleaseConfigError, ResolvedVariables,
    ValueAssignment, keys, release_config,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::fixtures::declaration_site;
use test_helpers::text::{parse_literal, split_list, unquote};

fn declaration(
    name: &str,
    partitions: &str,
    default: &str,
    appends: bool,
) -> release_config::ReleaseConfigResult<FlagDeclaration> {
    FlagDeclaration::new(
        name,
        split_list(partitions),
        parse_literal(default),
        appends,
        declaration_site(name),
    )
}

fn push_declaration(context: &ReleaseContext, flag: FlagDeclaration) {
    let mut flags = context.flags.get_or_insert_with(Vec::new);
    flags.push(flag);
}

fn merged(context: &ReleaseContext) -> Result<ResolvedVariables> {
    context
        .outcome
        .with_ref(|outcome| outcome.as_ref().map(Clone::clone).map_err(ToString::to_string))
        .ok_or_else(|| anyhow!("configuration has not been merged"))?
        .map_err(|err| anyhow!("merge failed unexpectedly: {err}"))
}

fn merge_error(context: &ReleaseContext) -> Result<ReleaseConfigError> {
    match context.outcome.take() {
        Some(Err(err)) => Ok(err),
        Some(Ok(variables)) => Err(anyhow!("merge succeeded unexpectedly: {variables:?}")),
        None => Err(anyhow!("configuration has not been merged")),
    }
}

#[given("a flag {name} declared for {partitions} with default {default}")]
fn declare_flag(
    release_context: &ReleaseContext,
    name: String,
    partitions: String,
    default: String,
) -> Result<()> {
    let flag = declaration(&name, &partitions, &default, false)?;
    push_declaration(release_context, flag);
    Ok(())
}

#[given("an appending flag {name} declared for {partitions} with default {default}")]
fn declare_appending_flag(
    release_context: &ReleaseContext,
    name: String,
    partitions: String,
    default: String,
) -> Result<()> {
    let flag = declaration(&name, &partitions, &default, true)?;
    push_declaration(release_context, flag);
    Ok(())
}

#[given("{name} is set to {value} in {site}")]
fn assign_value(release_context: &ReleaseContext, name: String, value: String, site: String) {
    let mut values = release_context.values.get_or_insert_with(Vec::new);
    values.push(ValueAssignment::new(name, parse_literal(&value), unquote(&site)));
}

#[when("the release configuration is merged")]
fn merge(release_context: &ReleaseContext) {
    let flags = release_context.flags.take().unwrap_or_default();
    let values = release_context.values.take().unwrap_or_default();
    release_context.outcome.set(release_config(&flags, &values));
}

#[when("declaring {name} for {partitions} with default {default}")]
fn try_declare(
    release_context: &ReleaseContext,
    name: String,
    partitions: String,
    default: String,
) -> Result<()> {
    match declaration(&name, &partitions, &default, false) {
        Ok(flag) => Err(anyhow!("declaration of {} was accepted", flag.name())),
        Err(err) => {
            release_context.declaration_error.set(err);
            Ok(())
        }
    }
}

#[then("{name} resolves to {expected}")]
fn assert_value(release_context: &ReleaseContext, name: String, expected: String) -> Result<()> {
    let variables = merged(release_context)?;
    let actual = variables
        .value_of(&name)
        .ok_or_else(|| anyhow!("{name} missing from output"))?;
    let expected_text = unquote(&expected);
    ensure!(
        actual.to_string() == expected_text,
        "expected {name} = {expected_text:?}, found {actual:?}"
    );
    Ok(())
}

#[then("{name} was set in {site}")]
fn assert_set_in(release_context: &ReleaseContext, name: String, site: String) -> Result<()> {
    let variables = merged(release_context)?;
    let expected = unquote(&site);
    ensure!(
        variables.set_in(&name) == Some(expected),
        "expected {name} set in {expected:?}, found {:?}",
        variables.set_in(&name)
    );
    Ok(())
}

#[then("the {partition} roster lists {name}")]
fn assert_roster(release_context: &ReleaseContext, partition: String, name: String) -> Result<()> {
    let variables = merged(release_context)?;
    let roster = variables.partition_roster(partition.parse::<Partition>()?);
    ensure!(
        roster.contains(&name.as_str()),
        "{name} missing from {partition} roster {roster:?}"
    );
    Ok(())
}

#[then("the {partition} roster is absent")]
fn assert_roster_absent(release_context: &ReleaseContext, partition: String) -> Result<()> {
    let variables = merged(release_context)?;
    let key = keys::partition_key(partition.parse::<Partition>()?);
    ensure!(
        variables.get(&key).is_none(),
        "unexpected roster {key} = {:?}",
        variables.get(&key)
    );
    Ok(())
}

#[then("every partition roster lists {name}")]
fn assert_every_roster(release_context: &ReleaseContext, name: String) -> Result<()> {
    let variables = merged(release_context)?;
    for partition in Partition::ALL {
        let key = keys::partition_key(partition);
        let roster = variables
            .get(&key)
            .map(FlagValue::as_string_list)
            .unwrap_or_default();
        ensure!(
            roster.contains(&name.as_str()),
            "{name} missing from {partition} roster {roster:?}"
        );
    }
    Ok(())
}

#[then("merging fails with a duplicate declaration error")]
fn assert_duplicate(release_context: &ReleaseContext) -> Result<()> {
    let err = merge_error(release_context)?;
    ensure!(
        matches!(err, ReleaseConfigError::DuplicateFlagDeclaration { .. }),
        "unexpected error variant: {err:?}"
    );
    Ok(())
}

#[then("merging fails with an undeclared flag error")]
fn assert_undeclared(release_context: &ReleaseContext) -> Result<()> {
    let err = merge_error(release_context)?;
    ensure!(
        matches!(err, ReleaseConfigError::UndeclaredFlagValue { .. }),
        "unexpected error variant: {err:?}"
    );
    Ok(())
}

#[then("the declaration is rejected for an invalid partition")]
fn assert_invalid_partition(release_context: &ReleaseContext) -> Result<()> {
    let err = release_context
        .declaration_error
        .take()
        .ok_or_else(|| anyhow!("no declaration error recorded"))?;
    ensure!(
        matches!(err, ReleaseConfigError::InvalidPartition { .. }),
        "unexpected error variant: {err:?}"
    );
    Ok(())
}
