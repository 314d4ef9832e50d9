//! Shared error types used across submodules.

use std::io;

use thiserror::Error;

use crate::simulation::SimulationError;
use crate::units::UnitParseError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CoulombFieldError {
    /// Wraps configuration errors.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Raised when writing reports or exports fails.
    #[error("export failed: {0}")]
    Io(#[from] io::Error),
}

impl From<UnitParseError> for CoulombFieldError {
    fn from(err: UnitParseError) -> Self {
        Self::Simulation(SimulationError::Unit(err))
    }
}
