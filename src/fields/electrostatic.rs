use log::{trace, warn};

use crate::constants::COULOMB_CONSTANT;
use crate::math::R2;

use super::charge::Charge;
use super::electric::{FieldVector, NearFieldPolicy};

/// Electric field at `point` due to a single point charge.
///
/// A point that coincides exactly with the charge yields the zero vector. The true field is
/// unbounded there; see [`NearFieldPolicy::ClampToZero`].
#[must_use]
pub fn field_from_charge(charge: &Charge, point: R2) -> FieldVector {
    field_from_charge_with(charge, point, NearFieldPolicy::ClampToZero)
}

/// Electric field at `point` due to a single point charge under an explicit singularity policy.
#[must_use]
pub fn field_from_charge_with(charge: &Charge, point: R2, policy: NearFieldPolicy) -> FieldVector {
    let r_vec = point - charge.position();
    let r2 = r_vec.norm_squared();
    if r2 == 0.0 {
        match policy {
            NearFieldPolicy::ClampToZero => {
                warn!("evaluation point coincides with charge at ({}, {}); clamping to zero", charge.x(), charge.y());
                return FieldVector::ZERO;
            }
            NearFieldPolicy::PropagateInfinity => {
                warn!("evaluation point coincides with charge at ({}, {}); field is unbounded", charge.x(), charge.y());
                return FieldVector::INFINITE;
            }
            NearFieldPolicy::Regularize { .. } => {}
        }
    }
    let r2 = policy.effective_r2(r2);
    let r3 = r2 * r2.sqrt();
    FieldVector::from_vector(r_vec * (COULOMB_CONSTANT * charge.q() / r3))
}

/// Superposed electric field at `point` from every charge in `charges`.
#[must_use]
pub fn total_field(charges: &[Charge], point: R2) -> FieldVector {
    total_field_with(charges, point, NearFieldPolicy::ClampToZero)
}

/// Superposed electric field under an explicit singularity policy.
#[must_use]
pub fn total_field_with(charges: &[Charge], point: R2, policy: NearFieldPolicy) -> FieldVector {
    let total: FieldVector = charges
        .iter()
        .map(|c| field_from_charge_with(c, point, policy))
        .sum();
    trace!("total field at ({}, {}) from {} charges: {:?}", point.x, point.y, charges.len(), total);
    total
}
