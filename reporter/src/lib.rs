//! Builds summary reports over battlefield scenario documents and renders
//! them as text sections or JSON.
//!
//! The flow is load, build, render: [`battlefield_model::load_scenario_file`]
//! produces a typed document, [`build_report`] derives a [`ScenarioReport`]
//! from it and a [`render::RenderReport`] implementation writes it out.
//! [`run_report`] chains the three for the report binaries.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use battlefield_model::{find_discrepancies, load_scenario_file, Scenario, ScenarioVariant};

mod analyze;
pub mod cli;
pub mod model;
pub mod render;
pub mod section;

pub use cli::OutputFormat;
pub use model::ScenarioReport;
pub use render::{JsonRenderer, RenderReport, TextRenderer};

/// Builds the full report for a loaded scenario document.
pub fn build_report(scenario: &Scenario) -> ScenarioReport {
    let variant = scenario.variant();
    ScenarioReport {
        variant,
        metadata: scenario.metadata.clone(),
        terrain: section::terrain_summary(scenario),
        images: section::image_listing(scenario),
        first_image: section::first_image_detail(scenario, variant),
        aggregates: section::aggregate_summary(scenario, variant),
        discrepancies: find_discrepancies(scenario),
    }
}

/// Loads the document at `path`, builds its report and renders it to `out`.
///
/// `expected` is the variant the calling binary is built for. A document of
/// the other variant is still reported in full, with a warning, since the
/// loaded content decides what the sections hold.
pub fn run_report<W>(
    path: &Path,
    expected: ScenarioVariant,
    format: OutputFormat,
    out: W,
) -> anyhow::Result<()>
where
    W: Write,
{
    log::info!("loading {expected} scenario data from {}", path.display());
    let scenario = load_scenario_file(path)?;
    log::debug!(
        "loaded {} images with {} enemies",
        scenario.images.len(),
        scenario.all_enemies().count()
    );

    let report = build_report(&scenario);
    if report.variant != expected {
        log::warn!(
            "{} looks like a {} document, not {expected}; reporting on the loaded content",
            path.display(),
            report.variant
        );
    }
    for discrepancy in &report.discrepancies {
        log::warn!("{discrepancy}");
    }

    match format {
        OutputFormat::Text => TextRenderer::new(out)
            .render(&report)
            .context("render text report")?,
        OutputFormat::Json => JsonRenderer::new(out)
            .render(&report)
            .context("render JSON report")?,
    }
    Ok(())
}
