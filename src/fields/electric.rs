use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use crate::math::{R2, Scalar};

/// Regularization added to squared distances on the grid path, in m².
pub const DEFAULT_REGULARIZATION_M2: Scalar = 1.0e-12;

/// How a field formula behaves when the evaluation point sits on a source.
///
/// The crate uses three conventions, one per evaluation path:
/// - the single-point vector path clamps to zero,
/// - the grid path regularizes every squared distance,
/// - the scalar magnitude formulas propagate `+∞`.
///
/// Each path exposes a `_with` variant taking an explicit policy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum NearFieldPolicy {
    /// Coincident points contribute the zero vector.
    #[default]
    ClampToZero,
    /// `epsilon_m2` is added to `r²` before forming `r³`; finite everywhere.
    Regularize {
        /// Softening term in square meters.
        epsilon_m2: Scalar,
    },
    /// Coincident points produce an infinite result.
    PropagateInfinity,
}

impl NearFieldPolicy {
    /// Regularization with [`DEFAULT_REGULARIZATION_M2`].
    #[must_use]
    pub const fn regularized() -> Self {
        Self::Regularize { epsilon_m2: DEFAULT_REGULARIZATION_M2 }
    }

    /// Effective squared distance after the policy is applied.
    #[inline]
    #[must_use]
    pub fn effective_r2(self, r2: Scalar) -> Scalar {
        match self {
            Self::Regularize { epsilon_m2 } => r2 + epsilon_m2,
            Self::ClampToZero | Self::PropagateInfinity => r2,
        }
    }
}

/// Electric field vector `(Ex, Ey)` in newtons per coulomb (N/C).
///
/// The magnitude is derived on demand and never cached.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldVector {
    /// X component (N/C).
    pub ex: Scalar,
    /// Y component (N/C).
    pub ey: Scalar,
}

impl FieldVector {
    /// The zero field.
    pub const ZERO: Self = Self { ex: 0.0, ey: 0.0 };
    /// Result of [`NearFieldPolicy::PropagateInfinity`] at a source.
    pub const INFINITE: Self = Self { ex: Scalar::INFINITY, ey: Scalar::INFINITY };

    /// Creates a field vector from components.
    #[must_use]
    pub const fn new(ex: Scalar, ey: Scalar) -> Self {
        Self { ex, ey }
    }

    /// Converts from an `nalgebra` vector.
    #[must_use]
    pub fn from_vector(v: R2) -> Self {
        Self { ex: v.x, ey: v.y }
    }

    /// Converts to an `nalgebra` vector.
    #[must_use]
    pub fn to_vector(self) -> R2 {
        R2::new(self.ex, self.ey)
    }

    /// `sqrt(Ex² + Ey²)`.
    #[must_use]
    pub fn magnitude(self) -> Scalar {
        self.ex.hypot(self.ey)
    }

    /// Unit direction, or `None` for a zero or non-finite field.
    #[must_use]
    pub fn direction(self) -> Option<R2> {
        let m = self.magnitude();
        if m > 0.0 && m.is_finite() {
            Some(self.to_vector() / m)
        } else {
            None
        }
    }

    /// True when both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.ex.is_finite() && self.ey.is_finite()
    }

    /// Force `q E` in newtons on a charge of `q` coulombs placed in this field.
    #[must_use]
    pub fn force_on(self, q: Scalar) -> R2 {
        self.to_vector() * q
    }
}

impl Add for FieldVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.ex + rhs.ex, self.ey + rhs.ey)
    }
}

impl AddAssign for FieldVector {
    fn add_assign(&mut self, rhs: Self) {
        self.ex += rhs.ex;
        self.ey += rhs.ey;
    }
}

impl Sub for FieldVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.ex - rhs.ex, self.ey - rhs.ey)
    }
}

impl Neg for FieldVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.ex, -self.ey)
    }
}

impl Sum for FieldVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn magnitude_and_direction() {
        let e = FieldVector::new(3.0, -4.0);
        assert_relative_eq!(e.magnitude(), 5.0, epsilon = 1.0e-12);
        let d = e.direction().expect("non-zero field");
        assert_relative_eq!(d.norm(), 1.0, epsilon = 1.0e-12);
        assert!(FieldVector::ZERO.direction().is_none());
        assert!(FieldVector::INFINITE.direction().is_none());
    }

    #[test]
    fn sum_is_componentwise() {
        let total: FieldVector = [FieldVector::new(1.0, 2.0), FieldVector::new(-3.0, 0.5)].into_iter().sum();
        assert_eq!(total, FieldVector::new(-2.0, 2.5));
    }

    #[test]
    fn regularize_only_shifts_r2_for_its_variant() {
        assert_eq!(NearFieldPolicy::ClampToZero.effective_r2(4.0), 4.0);
        assert_eq!(NearFieldPolicy::regularized().effective_r2(0.0), DEFAULT_REGULARIZATION_M2);
    }
}
