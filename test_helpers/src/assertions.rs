//! `anyhow`-flavoured assertions over resolved variables.

use anyhow::{Result, anyhow, ensure};
use release_config::{FlagValue, ResolvedVariables};

/// Fetches `key`, failing when it is absent.
///
/// # Errors
///
/// Returns an error naming the missing key.
pub fn variable<'a>(variables: &'a ResolvedVariables, key: &str) -> Result<&'a FlagValue> {
    variables
        .get(key)
        .ok_or_else(|| anyhow!("variable {key} missing from resolved set"))
}

/// Checks that `key` holds the string `expected`.
///
/// # Errors
///
/// Returns an error when the key is absent or holds anything else.
pub fn ensure_string(variables: &ResolvedVariables, key: &str, expected: &str) -> Result<()> {
    let actual = variable(variables, key)?;
    ensure!(
        actual.as_str() == Some(expected),
        "expected {key} = {expected:?}, found {actual:?}"
    );
    Ok(())
}

/// Checks that `key` holds exactly the listed strings, in order.
///
/// # Errors
///
/// Returns an error when the key is absent or the list differs.
pub fn ensure_list(variables: &ResolvedVariables, key: &str, expected: &[&str]) -> Result<()> {
    let actual = variable(variables, key)?;
    ensure!(
        actual.as_list().is_some() && actual.as_string_list() == expected,
        "expected {key} = {expected:?}, found {actual:?}"
    );
    Ok(())
}
