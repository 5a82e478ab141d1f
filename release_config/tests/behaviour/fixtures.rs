//! Shared fixtures for the release configuration scenarios.

use release_config::{
    FlagDeclaration, ReleaseConfigError, ReleaseConfigResult, ResolvedVariables, ValueAssignment,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Declarations, assignments and outcomes shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ReleaseContext {
    pub flags: Slot<Vec<FlagDeclaration>>,
    pub values: Slot<Vec<ValueAssignment>>,
    pub outcome: Slot<ReleaseConfigResult<ResolvedVariables>>,
    pub declaration_error: Slot<ReleaseConfigError>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn release_context() -> ReleaseContext {
    ReleaseContext::default()
}
