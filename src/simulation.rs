//! Run configuration and the scenario abstraction.

use log::debug;

use crate::fields::{total_field_grid, Charge, FieldGrid, GridSpec};
use crate::math::Scalar;
use crate::report::Report;
use crate::units::{ChargeUnit, LengthUnit, UnitParseError};

/// Default lattice resolution per axis.
pub const DEFAULT_RESOLUTION: usize = 300;

/// Caller-side ceiling on lattice size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    /// Maximum number of nodes (`nx * ny`).
    pub max_points: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self { max_points: 4_000_000 }
    }
}

/// Settings shared by every scenario in a session.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Human-readable identifier.
    pub name: String,
    /// Unit of typed positions and distances.
    pub length_unit: LengthUnit,
    /// Unit of typed charges in the quantitative analysis.
    pub charge_unit: ChargeUnit,
    /// Lattice nodes along x.
    pub nx: usize,
    /// Lattice nodes along y.
    pub ny: usize,
    /// Resolution ceiling.
    pub limits: GridLimits,
}

impl SimulationConfig {
    /// Meters, coulombs and a 300 × 300 lattice.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length_unit: LengthUnit::Meter,
            charge_unit: ChargeUnit::Coulomb,
            nx: DEFAULT_RESOLUTION,
            ny: DEFAULT_RESOLUTION,
            limits: GridLimits::default(),
        }
    }

    /// Builds a configuration from unit symbols such as `"cm"` and `"nC"`.
    pub fn from_unit_symbols(name: impl Into<String>, length: &str, charge: &str) -> Result<Self, SimulationError> {
        Ok(Self::new(name)
            .with_length_unit(length.parse()?)
            .with_charge_unit(charge.parse()?))
    }

    /// Sets the unit of typed positions.
    #[must_use]
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    /// Sets the unit of typed charges.
    #[must_use]
    pub fn with_charge_unit(mut self, unit: ChargeUnit) -> Self {
        self.charge_unit = unit;
        self
    }

    /// Sets the lattice resolution.
    #[must_use]
    pub fn with_resolution(mut self, nx: usize, ny: usize) -> Self {
        self.nx = nx;
        self.ny = ny;
        self
    }

    /// Sets the resolution ceiling.
    #[must_use]
    pub fn with_limits(mut self, limits: GridLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Checks resolution against the ceiling.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(SimulationError::ZeroResolution { nx: self.nx, ny: self.ny });
        }
        let requested = self.nx.saturating_mul(self.ny);
        if requested > self.limits.max_points {
            return Err(SimulationError::GridTooLarge { requested, max: self.limits.max_points });
        }
        Ok(())
    }

    /// Lattice over `[-range_m, +range_m]` at the configured resolution.
    pub fn grid_spec(&self, range_m: Scalar) -> Result<GridSpec, SimulationError> {
        self.validate()?;
        if !range_m.is_finite() || range_m <= 0.0 {
            return Err(SimulationError::InvalidRange(range_m));
        }
        Ok(GridSpec::new(range_m, self.nx, self.ny))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new("simulation")
    }
}

/// Errors raised while configuring a run.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A unit symbol could not be parsed.
    #[error(transparent)]
    Unit(#[from] UnitParseError),
    /// The grid half-width is not a positive finite number.
    #[error("grid range must be positive and finite, got {0}")]
    InvalidRange(Scalar),
    /// A lattice axis has no nodes.
    #[error("grid resolution must be at least 1x1, got {nx}x{ny}")]
    ZeroResolution {
        /// Requested nodes along x.
        nx: usize,
        /// Requested nodes along y.
        ny: usize,
    },
    /// The scenario was given nothing to evaluate.
    #[error("{0}: no points to evaluate")]
    NothingToEvaluate(&'static str),
    /// The lattice exceeds [`GridLimits::max_points`].
    #[error("grid of {requested} points exceeds the limit of {max}")]
    GridTooLarge {
        /// Requested node count.
        requested: usize,
        /// Configured ceiling.
        max: usize,
    },
}

/// A fixed charge configuration with its derived quantities.
pub trait Scenario {
    /// Quantities computed for this configuration.
    type Outcome;

    /// Short title used in reports.
    fn title(&self) -> &'static str;

    /// Source charges, in SI units.
    fn charges(&self) -> Vec<Charge>;

    /// Half-width of the visualization lattice in meters.
    fn grid_range(&self) -> Scalar;

    /// Computes the scenario's quantities.
    fn evaluate(&self) -> Self::Outcome;

    /// Renders inputs and results as text.
    fn report(&self, outcome: &Self::Outcome) -> Report;

    /// True when `outcome` has nothing to report and the run should stop.
    fn is_degenerate(&self, _outcome: &Self::Outcome) -> bool {
        false
    }

    /// Samples the scenario's field at the configured resolution.
    fn field_grid(&self, config: &SimulationConfig) -> Result<FieldGrid, SimulationError> {
        let spec = config.grid_spec(self.grid_range())?;
        debug!("{}: {} charges on ±{} m", self.title(), self.charges().len(), spec.range());
        Ok(total_field_grid(&self.charges(), &spec))
    }
}
