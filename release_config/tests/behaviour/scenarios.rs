//! Binds the release configuration feature file to the step registry.

use crate::fixtures::{ReleaseContext, release_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/release_config.feature",
    fixtures = [release_context: ReleaseContext]
);
