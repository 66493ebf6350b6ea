//! Binds the slide resolution feature file to the step registry.

use crate::fixtures::{ResolutionContext, resolution_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/slide_resolution.feature",
    fixtures = [resolution_context: ResolutionContext]
);
