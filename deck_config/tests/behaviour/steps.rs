//! Step definitions for the slide resolution scenarios.

use anyhow::{Result, anyhow, ensure};
use deck_config::{
    FooterConfiguration, GlobalConfiguration, HeaderConfiguration, SlideConfigDraft,
    SlideSettings, TransitionSpec,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::unquote;

use crate::fixtures::ResolutionContext;

fn resolved_slide(
    resolution_context: &ResolutionContext,
) -> Result<deck_config::ResolvedSlideConfig> {
    resolution_context
        .resolved
        .get()
        .ok_or_else(|| anyhow!("the slide has not been resolved"))
}

#[given("a default deck")]
fn default_deck(resolution_context: &ResolutionContext) {
    resolution_context.global.set(GlobalConfiguration::default());
}

#[given("a deck with a fade transition of {duration_ms:u32} milliseconds")]
fn fading_deck(resolution_context: &ResolutionContext, duration_ms: u32) {
    resolution_context
        .global
        .set(GlobalConfiguration::default().with_transition(TransitionSpec::Fade { duration_ms }));
}

#[given("a slide at route {route} with header title {title}")]
fn slide_with_header(
    resolution_context: &ResolutionContext,
    route: String,
    title: String,
) -> Result<()> {
    let header = HeaderConfiguration::titled(unquote(&title))?;
    resolution_context
        .draft
        .set(SlideConfigDraft::new(unquote(&route)).with_header(header));
    Ok(())
}

#[given("a slide at route {route} without overrides")]
fn plain_slide(resolution_context: &ResolutionContext, route: String) {
    resolution_context.draft.set(SlideConfigDraft::new(unquote(&route)));
}

#[given("a slide at route {route} showing slide numbers")]
fn numbered_slide(resolution_context: &ResolutionContext, route: String) {
    resolution_context.draft.set(
        SlideConfigDraft::new(unquote(&route))
            .with_footer(FooterConfiguration::default().with_slide_numbers(true)),
    );
}

#[when("the slide is resolved")]
fn resolve_slide(resolution_context: &ResolutionContext) -> Result<()> {
    let global = resolution_context
        .global
        .get()
        .ok_or_else(|| anyhow!("no deck configured"))?;
    let draft = resolution_context
        .draft
        .get()
        .ok_or_else(|| anyhow!("no slide configured"))?;
    resolution_context
        .resolved
        .set(draft.merge_with_global(&global));
    Ok(())
}

#[when("a shown header is built with title {title}")]
fn build_shown_header(resolution_context: &ResolutionContext, title: String) {
    resolution_context
        .header
        .set(HeaderConfiguration::new(true, unquote(&title)));
}

#[when("a hidden header is built with title {title}")]
fn build_hidden_header(resolution_context: &ResolutionContext, title: String) {
    resolution_context
        .header
        .set(HeaderConfiguration::new(false, unquote(&title)));
}

#[then("the resolved route is {route}")]
fn resolved_route(resolution_context: &ResolutionContext, route: String) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(
        slide.route() == unquote(&route),
        "unexpected route {}",
        slide.route()
    );
    Ok(())
}

#[then("the resolved slide has {steps:u32} steps")]
fn resolved_steps(resolution_context: &ResolutionContext, steps: u32) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(
        slide.steps().get() == steps,
        "unexpected steps {}",
        slide.steps()
    );
    Ok(())
}

#[then("the resolved header title is {title}")]
fn resolved_header_title(resolution_context: &ResolutionContext, title: String) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(slide.header().show_header(), "header should be shown");
    ensure!(
        slide.header().title() == unquote(&title),
        "unexpected title {}",
        slide.header().title()
    );
    Ok(())
}

#[then("the resolved header is hidden")]
fn resolved_header_hidden(resolution_context: &ResolutionContext) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(!slide.header().show_header(), "header should be hidden");
    Ok(())
}

#[then("the resolved footer is hidden")]
fn resolved_footer_hidden(resolution_context: &ResolutionContext) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(!slide.footer().show_footer(), "footer should be hidden");
    Ok(())
}

#[then("the resolved footer shows slide numbers")]
fn resolved_footer_numbers(resolution_context: &ResolutionContext) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(slide.footer().show_footer(), "footer should be shown");
    ensure!(
        slide.footer().show_slide_numbers(),
        "footer should carry slide numbers"
    );
    Ok(())
}

#[then("the resolved transition is {kind}")]
fn resolved_transition(resolution_context: &ResolutionContext, kind: String) -> Result<()> {
    let slide = resolved_slide(resolution_context)?;
    ensure!(
        slide.transition().kind() == unquote(&kind),
        "unexpected transition {:?}",
        slide.transition()
    );
    Ok(())
}

#[then("header construction fails")]
fn header_fails(resolution_context: &ResolutionContext) -> Result<()> {
    let outcome = resolution_context
        .header
        .take()
        .ok_or_else(|| anyhow!("no header was built"))?;
    ensure!(outcome.is_err(), "expected header construction to fail");
    Ok(())
}

#[then("header construction succeeds")]
fn header_succeeds(resolution_context: &ResolutionContext) -> Result<()> {
    let outcome = resolution_context
        .header
        .take()
        .ok_or_else(|| anyhow!("no header was built"))?;
    ensure!(outcome.is_ok(), "expected header construction to succeed");
    Ok(())
}
