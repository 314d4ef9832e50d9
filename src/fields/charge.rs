use crate::math::{R2, Scalar};
use crate::units::{ChargeUnit, LengthUnit};

/// Idealized point charge in the plane.
///
/// Positions are in meters and charge in coulombs. Values are fixed at construction; use
/// [`Charge::from_input`] to apply unit conversion at the boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    position: R2,
    charge_c: Scalar,
}

impl Charge {
    /// Creates a charge of `q` coulombs at `(x, y)` meters.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, q: Scalar) -> Self {
        Self { position: R2::new(x, y), charge_c: q }
    }

    /// Creates a charge at the given position vector.
    #[must_use]
    pub const fn at(position: R2, q: Scalar) -> Self {
        Self { position, charge_c: q }
    }

    /// Creates a charge from user-unit input, converting to SI once.
    #[must_use]
    pub fn from_input(x: Scalar, y: Scalar, q: Scalar, length: LengthUnit, charge: ChargeUnit) -> Self {
        Self::new(length.to_meters(x), length.to_meters(y), charge.to_coulombs(q))
    }

    /// Position in meters.
    #[must_use]
    pub const fn position(&self) -> R2 {
        self.position
    }

    /// X coordinate in meters.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.position.x
    }

    /// Y coordinate in meters.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.position.y
    }

    /// Signed charge in coulombs.
    #[must_use]
    pub const fn q(&self) -> Scalar {
        self.charge_c
    }

    /// True for strictly positive charge.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.charge_c > 0.0
    }
}

/// Location where the field is evaluated, optionally carrying a test charge.
///
/// A point with a test charge is a *force point*; without one it is a *sensor point*.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationPoint {
    position: R2,
    test_charge: Option<Scalar>,
}

impl EvaluationPoint {
    /// Sensor point at `(x, y)` meters.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { position: R2::new(x, y), test_charge: None }
    }

    /// Force point at `(x, y)` meters carrying `q_test` coulombs.
    #[must_use]
    pub fn with_test_charge(x: Scalar, y: Scalar, q_test: Scalar) -> Self {
        Self { position: R2::new(x, y), test_charge: Some(q_test) }
    }

    /// Position in meters.
    #[must_use]
    pub const fn position(&self) -> R2 {
        self.position
    }

    /// Test charge in coulombs, if this is a force point.
    #[must_use]
    pub const fn test_charge(&self) -> Option<Scalar> {
        self.test_charge
    }

    /// True when a test charge is attached.
    #[must_use]
    pub const fn is_force_point(&self) -> bool {
        self.test_charge.is_some()
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> Scalar {
        self.position.norm()
    }
}

impl From<R2> for EvaluationPoint {
    fn from(position: R2) -> Self {
        Self { position, test_charge: None }
    }
}
