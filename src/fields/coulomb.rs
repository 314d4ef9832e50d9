//! Closed-form single-source magnitudes.
//!
//! These take a scalar separation rather than positions. At `r == 0` both return
//! `+∞`; callers must check [`f64::is_finite`] before further arithmetic or formatting.

use crate::constants::COULOMB_CONSTANT;
use crate::math::Scalar;

/// Field magnitude `k |q| / r²` in N/C at distance `r` meters from a charge of `q` coulombs.
#[must_use]
pub fn field_magnitude(q: Scalar, r: Scalar) -> Scalar {
    if r == 0.0 {
        return Scalar::INFINITY;
    }
    COULOMB_CONSTANT * q.abs() / (r * r)
}

/// Coulomb force magnitude `k |q1 q2| / r²` in newtons.
#[must_use]
pub fn force_magnitude(q1: Scalar, q2: Scalar, r: Scalar) -> Scalar {
    if r == 0.0 {
        return Scalar::INFINITY;
    }
    COULOMB_CONSTANT * (q1 * q2).abs() / (r * r)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inverse_square_reference_values() {
        assert_relative_eq!(field_magnitude(1.0e-9, 1.0), 8.99, max_relative = 1.0e-12);
        assert_relative_eq!(field_magnitude(1.0e-9, 2.0), 2.2475, max_relative = 1.0e-12);
        assert_relative_eq!(field_magnitude(-1.0e-9, 2.0), 2.2475, max_relative = 1.0e-12);
    }

    #[test]
    fn force_is_symmetric_in_charges() {
        let (q1, q2, r) = (-6.0e-9, 2.5e-9, 0.3);
        assert_eq!(force_magnitude(q1, q2, r), force_magnitude(q2, q1, r));
        assert_relative_eq!(force_magnitude(q1, q2, r), 1.498_333_333e-6, max_relative = 1.0e-9);
    }

    #[test]
    fn zero_distance_is_infinite() {
        assert_eq!(field_magnitude(1.0e-9, 0.0), Scalar::INFINITY);
        assert_eq!(force_magnitude(1.0e-9, 1.0e-9, 0.0), Scalar::INFINITY);
    }

    #[test]
    fn force_equals_test_charge_times_field() {
        let (q, q_test, r) = (4.0e-9, -3.0e-9, 0.75);
        assert_relative_eq!(force_magnitude(q, q_test, r), field_magnitude(q, r) * q_test.abs(), max_relative = 1.0e-12);
    }
}
