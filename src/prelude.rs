//! Convenience re-exports for building point-charge experiments.

pub use crate::analysis::{
    analyze, analyze_points, evaluate_point, Analysis, AnalysisPoint, AnalysisRecord, ForcePoint, Measurement,
    SensorPoint,
};
pub use crate::constants::*;
pub use crate::errors::CoulombFieldError;
pub use crate::fields::{
    field_from_charge,
    field_from_charge_with,
    field_magnitude,
    force_magnitude,
    sample_grid,
    total_field,
    total_field_grid,
    total_field_grid_with,
    total_field_with,
    Charge,
    EvaluationPoint,
    FieldGrid,
    FieldVector,
    GridSpec,
    NearFieldPolicy,
};
pub use crate::io::{write_analysis_csv, write_grid_csv};
pub use crate::math::{linspace, Samples, Scalar, R2};
pub use crate::report::{format_magnitude, Report};
pub use crate::run_scenario;
pub use crate::scenarios::{FieldLines, Interaction, Quantitative, Side, Superposition};
pub use crate::simulation::{GridLimits, Scenario, SimulationConfig, SimulationError};
pub use crate::units::{ChargeUnit, LengthUnit};
