#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Input unit conversion (meters/centimeters, coulombs/nanocoulombs).
pub mod units;
/// Shared mathematical utilities (vectors, sample arrays, spacing).
pub mod math;
/// Point charges, field evaluation and lattice sampling.
pub mod fields;
/// Force-point and sensor-point magnitude analysis.
pub mod analysis;
/// Run configuration and the scenario trait.
pub mod simulation;
/// Ready-made two-charge and single-source scenarios.
pub mod scenarios;
/// Plain-text result summaries.
pub mod report;
/// CSV export of sampled grids and analyses.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

use std::io::Write;

use crate::errors::CoulombFieldError;
use crate::simulation::{Scenario, SimulationConfig, SimulationError};

/// Evaluates `scenario`, writes its text report to `report_out` and its sampled field as
/// CSV to `grid_out`. Returns the computed outcome.
///
/// A degenerate outcome (see [`Scenario::is_degenerate`]) fails with
/// [`SimulationError::NothingToEvaluate`] before anything is written.
pub fn run_scenario<S, R, G>(
    scenario: &S,
    config: &SimulationConfig,
    report_out: R,
    grid_out: G,
) -> Result<S::Outcome, CoulombFieldError>
where
    S: Scenario,
    R: Write,
    G: Write,
{
    let outcome = scenario.evaluate();
    if scenario.is_degenerate(&outcome) {
        log::warn!("{}: nothing to evaluate, skipping report", scenario.title());
        return Err(SimulationError::NothingToEvaluate(scenario.title()).into());
    }
    let grid = scenario.field_grid(config)?;
    scenario.report(&outcome).write_to(report_out)?;
    io::write_grid_csv(grid_out, &grid)?;
    log::info!("{}: wrote report and {}x{} grid", scenario.title(), grid.shape().1, grid.shape().0);
    Ok(outcome)
}
