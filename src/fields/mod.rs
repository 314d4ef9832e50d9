//! Point charges and the fields they produce.

mod charge;
mod coulomb;
mod electric;
mod electrostatic;
mod grid;

pub use charge::{Charge, EvaluationPoint};
pub use coulomb::{field_magnitude, force_magnitude};
pub use electric::{FieldVector, NearFieldPolicy, DEFAULT_REGULARIZATION_M2};
pub use electrostatic::{field_from_charge, field_from_charge_with, total_field, total_field_with};
pub use grid::{
    sample_grid,
    total_field_grid,
    total_field_grid_with,
    FieldGrid,
    GridSpec,
    LOG_MAGNITUDE_FLOOR,
};
