//! Force-point and sensor-point evaluation around a single source at the origin.

use log::debug;

use crate::fields::{field_magnitude, force_magnitude, EvaluationPoint};
use crate::math::{R2, Scalar};

/// Point carrying a test charge; both field and force are reported.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcePoint {
    /// Position in meters.
    pub position: R2,
    /// Test charge in coulombs.
    pub test_charge: Scalar,
}

impl ForcePoint {
    /// Creates a force point at `(x, y)` meters carrying `q_test` coulombs.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, q_test: Scalar) -> Self {
        Self { position: R2::new(x, y), test_charge: q_test }
    }
}

/// Point where only the field is reported.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorPoint {
    /// Position in meters.
    pub position: R2,
}

impl SensorPoint {
    /// Creates a sensor point at `(x, y)` meters.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { position: R2::new(x, y) }
    }
}

/// Tagged analysis input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisPoint {
    /// Field and force requested.
    Force(ForcePoint),
    /// Field only.
    Sensor(SensorPoint),
}

impl From<EvaluationPoint> for AnalysisPoint {
    fn from(point: EvaluationPoint) -> Self {
        match point.test_charge() {
            Some(test_charge) => Self::Force(ForcePoint { position: point.position(), test_charge }),
            None => Self::Sensor(SensorPoint { position: point.position() }),
        }
    }
}

/// Kind-specific part of an [`AnalysisRecord`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Result for a force point.
    Force {
        /// Test charge in coulombs.
        test_charge: Scalar,
        /// `|F|` in newtons; `+∞` at the origin.
        force_magnitude: Scalar,
    },
    /// Result for a sensor point.
    Sensor,
}

/// One evaluated point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRecord {
    /// Position in meters.
    pub position: R2,
    /// Distance from the source in meters.
    pub distance: Scalar,
    /// `|E|` in N/C; `+∞` at the origin.
    pub field_magnitude: Scalar,
    /// Force-specific values, if any.
    pub measurement: Measurement,
}

impl AnalysisRecord {
    /// True for records produced from force points.
    #[must_use]
    pub const fn is_force(&self) -> bool {
        matches!(self.measurement, Measurement::Force { .. })
    }

    /// `|F|` for force records.
    #[must_use]
    pub const fn force_magnitude(&self) -> Option<Scalar> {
        match self.measurement {
            Measurement::Force { force_magnitude, .. } => Some(force_magnitude),
            Measurement::Sensor => None,
        }
    }

    /// True when the point sits on the source and the magnitudes are unbounded.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        !self.field_magnitude.is_finite()
    }
}

/// Results for one source charge: force records first, then sensor records, each in input order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Source charge at the origin, in coulombs.
    pub source_charge: Scalar,
    /// Evaluated points.
    pub records: Vec<AnalysisRecord>,
}

impl Analysis {
    /// True when no points were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from force points.
    pub fn force_records(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter().filter(|r| r.is_force())
    }

    /// Records from sensor points.
    pub fn sensor_records(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter().filter(|r| !r.is_force())
    }
}

/// Evaluates a single point against a source of `source_charge` coulombs at the origin.
#[must_use]
pub fn evaluate_point(source_charge: Scalar, point: AnalysisPoint) -> AnalysisRecord {
    let position = match point {
        AnalysisPoint::Force(p) => p.position,
        AnalysisPoint::Sensor(p) => p.position,
    };
    let distance = position.norm();
    let measurement = match point {
        AnalysisPoint::Force(p) => Measurement::Force {
            test_charge: p.test_charge,
            force_magnitude: force_magnitude(source_charge, p.test_charge, distance),
        },
        AnalysisPoint::Sensor(_) => Measurement::Sensor,
    };
    AnalysisRecord {
        position,
        distance,
        field_magnitude: field_magnitude(source_charge, distance),
        measurement,
    }
}

/// Evaluates force points and sensor points against a source at the origin.
#[must_use]
pub fn analyze(source_charge: Scalar, force_points: &[ForcePoint], sensor_points: &[SensorPoint]) -> Analysis {
    debug!(
        "analyzing {} force points and {} sensor points for Q1 = {:e} C",
        force_points.len(),
        sensor_points.len(),
        source_charge
    );
    let records = force_points
        .iter()
        .map(|&p| AnalysisPoint::Force(p))
        .chain(sensor_points.iter().map(|&p| AnalysisPoint::Sensor(p)))
        .map(|p| evaluate_point(source_charge, p))
        .collect();
    Analysis { source_charge, records }
}

/// Evaluates tagged points in the order given.
#[must_use]
pub fn analyze_points<I>(source_charge: Scalar, points: I) -> Analysis
where
    I: IntoIterator,
    I::Item: Into<AnalysisPoint>,
{
    let records = points
        .into_iter()
        .map(|p| evaluate_point(source_charge, p.into()))
        .collect();
    Analysis { source_charge, records }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn empty_inputs_yield_empty_analysis() {
        let a = analyze(1.0e-9, &[], &[]);
        assert!(a.is_empty());
        assert_eq!(a.force_records().count(), 0);
    }

    #[test]
    fn force_points_report_field_and_force() {
        let a = analyze(-6.0e-9, &[ForcePoint::new(0.3, 0.4, 2.0e-9)], &[]);
        let rec = &a.records[0];
        assert_relative_eq!(rec.distance, 0.5, epsilon = 1.0e-12);
        assert_relative_eq!(rec.field_magnitude, 8.99e9 * 6.0e-9 / 0.25, max_relative = 1.0e-12);
        assert_relative_eq!(
            rec.force_magnitude().expect("force record"),
            8.99e9 * 12.0e-18 / 0.25,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn sensor_at_source_is_infinite() {
        let a = analyze(1.0e-9, &[], &[SensorPoint::new(0.0, 0.0), SensorPoint::new(2.0, 0.0)]);
        assert!(a.records[0].is_singular());
        assert_eq!(a.records[0].field_magnitude, Scalar::INFINITY);
        assert!(a.records[0].force_magnitude().is_none());
        assert_relative_eq!(a.records[1].field_magnitude, 2.2475, max_relative = 1.0e-12);
    }

    #[test]
    fn force_records_precede_sensor_records() {
        let a = analyze(
            1.0e-9,
            &[ForcePoint::new(1.0, 0.0, 1.0e-9)],
            &[SensorPoint::new(0.0, 1.0), SensorPoint::new(0.0, 2.0)],
        );
        let kinds: Vec<bool> = a.records.iter().map(AnalysisRecord::is_force).collect();
        assert_eq!(kinds, vec![true, false, false]);
        assert_eq!(a.sensor_records().count(), 2);
    }

    #[test]
    fn evaluation_points_dispatch_on_test_charge() {
        let pts = [EvaluationPoint::new(1.0, 0.0), EvaluationPoint::with_test_charge(0.0, 1.0, 1.0e-9)];
        let a = analyze_points(1.0e-9, pts);
        assert!(!a.records[0].is_force());
        assert!(a.records[1].is_force());
    }
}
