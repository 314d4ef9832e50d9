//! Ready-made charge configurations.
//!
//! Each scenario takes user-unit input, converts it to SI once at construction, and
//! implements [`Scenario`] so it can be evaluated, reported and sampled on a lattice.

use log::debug;

use crate::analysis::{analyze, Analysis, ForcePoint, Measurement, SensorPoint};
use crate::fields::{field_from_charge, force_magnitude, total_field, Charge, FieldVector};
use crate::math::{R2, Scalar};
use crate::report::{format_field, format_magnitude, format_position, Report};
use crate::simulation::{Scenario, SimulationConfig};

/// Minimum lattice half-width for two-charge layouts, in meters.
const MIN_PAIR_RANGE_M: Scalar = 2.0;
/// Lattice half-width for layouts centred on a single source, in meters.
const DEFAULT_RANGE_M: Scalar = 5.0;

/// Side of the origin on which the second charge is placed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    /// Negative x.
    Left,
    /// Positive x.
    #[default]
    Right,
}

impl Side {
    /// `"L"` (any case) selects [`Side::Left`]; anything else selects [`Side::Right`].
    #[must_use]
    pub fn from_input(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("l") {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Places a distance on this side of the origin.
    #[must_use]
    pub fn apply(self, distance: Scalar) -> Scalar {
        match self {
            Self::Left => -distance.abs(),
            Self::Right => distance.abs(),
        }
    }
}

fn pair_range(offset_m: Scalar) -> Scalar {
    MIN_PAIR_RANGE_M.max(2.0 * offset_m.abs() + 1.0)
}

fn charge_line(index: usize, c: &Charge) -> String {
    format!("Charge {}: q = {:.3e} C at {}", index + 1, c.q(), format_position(c.position()))
}

/// `Q1` at the origin and `Q2` on the x-axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    first: Charge,
    second: Charge,
}

/// Fields at the midpoint between the two charges.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionOutcome {
    /// Distance between the charges in meters.
    pub separation: Scalar,
    /// Midpoint of the segment joining the charges.
    pub midpoint: R2,
    /// Field of `Q1` at the midpoint.
    pub first_field: FieldVector,
    /// Field of `Q2` at the midpoint.
    pub second_field: FieldVector,
    /// Superposed field at the midpoint.
    pub total: FieldVector,
    /// Force exerted by `Q1` on `Q2`, in newtons; `None` when the charges coincide.
    pub force_on_second: Option<R2>,
    /// `|F| = k |Q1 Q2| / r²`, `+∞` when the charges coincide.
    pub force_magnitude: Scalar,
}

impl Interaction {
    /// Charges in coulombs; `distance` in the configured length unit.
    #[must_use]
    pub fn new(config: &SimulationConfig, q1: Scalar, distance: Scalar, side: Side, q2: Scalar) -> Self {
        let x2 = config.length_unit.to_meters(side.apply(distance));
        Self { first: Charge::new(0.0, 0.0, q1), second: Charge::new(x2, 0.0, q2) }
    }

    /// Midpoint between the charges.
    #[must_use]
    pub fn midpoint(&self) -> R2 {
        (self.first.position() + self.second.position()) / 2.0
    }
}

impl Scenario for Interaction {
    type Outcome = InteractionOutcome;

    fn title(&self) -> &'static str {
        "Charge Interaction - Two Charges"
    }

    fn charges(&self) -> Vec<Charge> {
        vec![self.first, self.second]
    }

    fn grid_range(&self) -> Scalar {
        pair_range(self.second.x())
    }

    fn evaluate(&self) -> InteractionOutcome {
        let midpoint = self.midpoint();
        let first_field = field_from_charge(&self.first, midpoint);
        let second_field = field_from_charge(&self.second, midpoint);
        let separation = (self.second.position() - self.first.position()).norm();
        let force_on_second = (separation > 0.0)
            .then(|| field_from_charge(&self.first, self.second.position()).force_on(self.second.q()));
        debug!("interaction: midpoint {:?}, |E| = {:e}", midpoint, (first_field + second_field).magnitude());
        InteractionOutcome {
            separation,
            midpoint,
            first_field,
            second_field,
            total: first_field + second_field,
            force_on_second,
            force_magnitude: force_magnitude(self.first.q(), self.second.q(), separation),
        }
    }

    fn report(&self, outcome: &InteractionOutcome) -> Report {
        let mut report = Report::new(
            self.title(),
            "Interaction between two point charges. Charge 1 sits at the origin, charge 2 on the x-axis.",
        );
        for (i, c) in self.charges().iter().enumerate() {
            report.input(charge_line(i, c));
        }
        report
            .input(format!("Separation = {:.4} m", outcome.separation))
            .result(format!("Field at midpoint {}:", format_position(outcome.midpoint)))
            .result(format!(" E1 = {}", format_field(outcome.first_field)))
            .result(format!(" E2 = {}", format_field(outcome.second_field)))
            .result(format!(" E_total = {}", format_field(outcome.total)));
        let magnitude = format_magnitude(outcome.force_magnitude, "N");
        match outcome.force_on_second {
            Some(f) => report.result(format!("Force on charge 2 = ({:.3e}, {:.3e}) N, |F| = {magnitude}", f.x, f.y)),
            None => report.result(format!("Force on charge 2: |F| = {magnitude}")),
        };
        report
    }
}

/// One charge at the origin, optionally with a second on the x-axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLines {
    charges: Vec<Charge>,
}

impl FieldLines {
    /// A single source of `q1` coulombs at the origin.
    #[must_use]
    pub fn single(q1: Scalar) -> Self {
        Self { charges: vec![Charge::new(0.0, 0.0, q1)] }
    }

    /// Two sources laid out as in [`Interaction`].
    #[must_use]
    pub fn pair(config: &SimulationConfig, q1: Scalar, distance: Scalar, side: Side, q2: Scalar) -> Self {
        Self { charges: Interaction::new(config, q1, distance, side, q2).charges() }
    }
}

impl Scenario for FieldLines {
    type Outcome = Vec<Charge>;

    fn title(&self) -> &'static str {
        "Electric Field & Field Lines"
    }

    fn charges(&self) -> Vec<Charge> {
        self.charges.clone()
    }

    fn grid_range(&self) -> Scalar {
        DEFAULT_RANGE_M
    }

    fn evaluate(&self) -> Vec<Charge> {
        self.charges.clone()
    }

    fn report(&self, outcome: &Vec<Charge>) -> Report {
        let mut report = Report::new(
            self.title(),
            "Field visualization data (vectors, streamlines, log-magnitude) for the given charges.",
        );
        for (i, c) in outcome.iter().enumerate() {
            report.input(charge_line(i, c));
        }
        report.result("Field grid sampled for rendering.");
        report
    }
}

/// Force points and sensor points around a source at the origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Quantitative {
    source_charge: Scalar,
    force_points: Vec<ForcePoint>,
    sensor_points: Vec<SensorPoint>,
}

impl Quantitative {
    /// Charges in the configured charge unit; coordinates in the configured length unit.
    /// `force_points` holds `(x, y, q_test)` and `sensor_points` holds `(x, y)`.
    #[must_use]
    pub fn new(
        config: &SimulationConfig,
        source_charge: Scalar,
        force_points: &[(Scalar, Scalar, Scalar)],
        sensor_points: &[(Scalar, Scalar)],
    ) -> Self {
        let len = config.length_unit;
        let chg = config.charge_unit;
        Self {
            source_charge: chg.to_coulombs(source_charge),
            force_points: force_points
                .iter()
                .map(|&(x, y, q)| ForcePoint::new(len.to_meters(x), len.to_meters(y), chg.to_coulombs(q)))
                .collect(),
            sensor_points: sensor_points
                .iter()
                .map(|&(x, y)| SensorPoint::new(len.to_meters(x), len.to_meters(y)))
                .collect(),
        }
    }

    /// True when neither force nor sensor points were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.force_points.is_empty() && self.sensor_points.is_empty()
    }
}

impl Scenario for Quantitative {
    type Outcome = Analysis;

    fn title(&self) -> &'static str {
        "Quantitative Analysis - Force & Sensor Points"
    }

    fn charges(&self) -> Vec<Charge> {
        vec![Charge::new(0.0, 0.0, self.source_charge)]
    }

    fn grid_range(&self) -> Scalar {
        DEFAULT_RANGE_M
    }

    fn evaluate(&self) -> Analysis {
        analyze(self.source_charge, &self.force_points, &self.sensor_points)
    }

    fn is_degenerate(&self, outcome: &Analysis) -> bool {
        outcome.is_empty()
    }

    fn report(&self, outcome: &Analysis) -> Report {
        let mut report = Report::new(
            self.title(),
            "Field and force at test points. Force points carry a test charge (|E| and |F|); \
             sensor points report |E| only.",
        );
        report.input(format!("Q1 = {:.3e} C at (0, 0)", outcome.source_charge));
        for (i, rec) in outcome.force_records().enumerate() {
            if let Measurement::Force { test_charge, force_magnitude } = rec.measurement {
                report
                    .input(format!("Force point {}: {}, q_test = {:.3e} C", i + 1, format_position(rec.position), test_charge))
                    .result(format!("Force point {}: r = {:.4} m", i + 1, rec.distance))
                    .result(format!("  |E| = {}", format_magnitude(rec.field_magnitude, "N/C")))
                    .result(format!("  |F| = {}", format_magnitude(force_magnitude, "N")));
            }
        }
        for (j, rec) in outcome.sensor_records().enumerate() {
            report
                .input(format!("Sensor point {}: {}", j + 1, format_position(rec.position)))
                .result(format!("Sensor point {}: r = {:.4} m", j + 1, rec.distance))
                .result(format!("  |E| = {}", format_magnitude(rec.field_magnitude, "N/C")));
        }
        report
    }
}

/// `Q1` at `-d` and `Q2` at `+d` with a sensor on the x-axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superposition {
    first: Charge,
    second: Charge,
    sensor: R2,
}

/// Contributions and total field at the sensor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperpositionOutcome {
    /// Sensor location in meters.
    pub sensor: R2,
    /// Field of `Q1` at the sensor.
    pub first_field: FieldVector,
    /// Field of `Q2` at the sensor.
    pub second_field: FieldVector,
    /// Superposed field at the sensor.
    pub total: FieldVector,
}

impl Superposition {
    /// Charges in coulombs; `d` and `sensor_x` in the configured length unit. The sensor
    /// defaults to the origin.
    #[must_use]
    pub fn new(config: &SimulationConfig, q1: Scalar, q2: Scalar, d: Scalar, sensor_x: Option<Scalar>) -> Self {
        let unit = config.length_unit;
        let half = unit.to_meters(d.abs());
        Self {
            first: Charge::new(-half, 0.0, q1),
            second: Charge::new(half, 0.0, q2),
            sensor: R2::new(unit.to_meters(sensor_x.unwrap_or(0.0)), 0.0),
        }
    }

    /// Sensor location in meters.
    #[must_use]
    pub const fn sensor(&self) -> R2 {
        self.sensor
    }
}

impl Scenario for Superposition {
    type Outcome = SuperpositionOutcome;

    fn title(&self) -> &'static str {
        "Superposition of Electric Fields (two charges)"
    }

    fn charges(&self) -> Vec<Charge> {
        vec![self.first, self.second]
    }

    fn grid_range(&self) -> Scalar {
        pair_range(self.second.x())
    }

    fn evaluate(&self) -> SuperpositionOutcome {
        SuperpositionOutcome {
            sensor: self.sensor,
            first_field: field_from_charge(&self.first, self.sensor),
            second_field: field_from_charge(&self.second, self.sensor),
            total: total_field(&self.charges(), self.sensor),
        }
    }

    fn report(&self, outcome: &SuperpositionOutcome) -> Report {
        let mut report = Report::new(
            self.title(),
            "Total field at the sensor as the vector sum of both charges' contributions.",
        );
        for (i, c) in self.charges().iter().enumerate() {
            report.input(charge_line(i, c));
        }
        report
            .input(format!("Sensor: {}", format_position(outcome.sensor)))
            .result(format!("E1 = {}", format_field(outcome.first_field)))
            .result(format!("E2 = {}", format_field(outcome.second_field)))
            .result(format!("E_total = {}", format_field(outcome.total)));
        report
    }
}
