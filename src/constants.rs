//! Physical constants used by the field formulas.
//!
//! ## Accuracy
//!
//! The Coulomb constant is carried with three significant figures, the value used in
//! introductory worksheets (8.99 × 10⁹ N·m²/C²). The CODATA-derived value
//! `1 / (4π ε₀)` is available through [`coulomb_constant_exact`] for callers that need it.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::Scalar;

/// Coulomb constant _k_ in newton square meters per square coulomb (N·m²/C²).
/// Three-significant-figure value: 8.99 × 10⁹.
pub const COULOMB_CONSTANT: Scalar = 8.99e9;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;

/// Returns `1 / (4π ε₀)` from the CODATA permittivity.
#[inline]
#[must_use]
pub fn coulomb_constant_exact() -> Scalar {
    1.0 / (4.0 * PI * VACUUM_PERMITTIVITY)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rounded_constant_tracks_codata_value() {
        assert_relative_eq!(COULOMB_CONSTANT, coulomb_constant_exact(), max_relative = 1.0e-3);
    }
}
