//! Shared fixtures for the behavioural scenarios.

use deck_config::{
    GlobalConfiguration, HeaderConfiguration, InvalidHeaderConfiguration, ResolvedSlideConfig,
    SlideConfigDraft,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state carried from the deck setup through to assertions.
#[derive(Debug, Default, ScenarioState)]
pub struct ResolutionContext {
    pub global: Slot<GlobalConfiguration>,
    pub draft: Slot<SlideConfigDraft>,
    pub resolved: Slot<ResolvedSlideConfig>,
    pub header: Slot<Result<HeaderConfiguration, InvalidHeaderConfiguration>>,
}

/// Creates an empty resolution context for each scenario.
#[fixture]
pub fn resolution_context() -> ResolutionContext {
    ResolutionContext::default()
}
