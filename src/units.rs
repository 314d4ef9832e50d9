//! Input unit handling.
//!
//! The field formulas always work in SI units. Conversions happen once, where user input
//! enters the crate, through [`LengthUnit::to_meters`] and [`ChargeUnit::to_coulombs`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::math::Scalar;

/// Raised when a unit symbol is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} unit `{symbol}`")]
pub struct UnitParseError {
    kind: &'static str,
    symbol: String,
}

/// Length unit used for positions and distances typed by a user.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// SI meters (scale 1).
    #[default]
    Meter,
    /// Centimeters (scale 0.01).
    Centimeter,
}

impl LengthUnit {
    /// Multiplier converting a value in this unit to meters.
    #[must_use]
    pub const fn scale(self) -> Scalar {
        match self {
            Self::Meter => 1.0,
            Self::Centimeter => 0.01,
        }
    }

    /// Converts `value` to meters.
    #[inline]
    #[must_use]
    pub fn to_meters(self, value: Scalar) -> Scalar {
        value * self.scale()
    }

    /// Short symbol (`m`, `cm`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "m" | "meter" | "meters" => Ok(Self::Meter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            other => Err(UnitParseError { kind: "length", symbol: other.to_owned() }),
        }
    }
}

/// Charge unit used for source and test charges typed by a user.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChargeUnit {
    /// SI coulombs.
    #[default]
    Coulomb,
    /// Nanocoulombs (1 nC = 10⁻⁹ C).
    NanoCoulomb,
}

impl ChargeUnit {
    /// Multiplier converting a value in this unit to coulombs.
    #[must_use]
    pub const fn scale(self) -> Scalar {
        match self {
            Self::Coulomb => 1.0,
            Self::NanoCoulomb => 1.0e-9,
        }
    }

    /// Converts `value` to coulombs.
    #[inline]
    #[must_use]
    pub fn to_coulombs(self, value: Scalar) -> Scalar {
        value * self.scale()
    }

    /// Short symbol (`C`, `nC`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Coulomb => "C",
            Self::NanoCoulomb => "nC",
        }
    }
}

impl fmt::Display for ChargeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ChargeUnit {
    type Err = UnitParseError;

    // Case matters here: `mC` and `MC` would differ by nine orders of magnitude.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "C" | "coulomb" | "coulombs" => Ok(Self::Coulomb),
            "nC" | "nanocoulomb" | "nanocoulombs" => Ok(Self::NanoCoulomb),
            other => Err(UnitParseError { kind: "charge", symbol: other.to_owned() }),
        }
    }
}
