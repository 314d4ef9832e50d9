use approx::assert_relative_eq;
use coulomb_field::prelude::*;

#[test]
fn superposition_is_linear_over_disjoint_sets() {
    let a = [Charge::new(-1.2, 0.4, 3.0e-9), Charge::new(0.8, -0.3, -1.5e-9)];
    let b = [Charge::new(0.1, 1.9, 4.0e-9), Charge::new(-0.6, -1.1, 2.0e-9)];
    let union: Vec<Charge> = a.iter().chain(&b).copied().collect();
    for p in [R2::new(0.0, 0.0), R2::new(2.5, -1.0), R2::new(-0.3, 0.7)] {
        let whole = total_field(&union, p);
        let parts = total_field(&a, p) + total_field(&b, p);
        assert_relative_eq!(whole.ex, parts.ex, max_relative = 1.0e-12);
        assert_relative_eq!(whole.ey, parts.ey, max_relative = 1.0e-12);
    }
}

#[test]
fn field_magnitude_follows_inverse_square() {
    assert_relative_eq!(field_magnitude(1.0e-9, 1.0), 8.99, max_relative = 1.0e-12);
    assert_relative_eq!(field_magnitude(1.0e-9, 2.0), 2.2475, max_relative = 1.0e-12);
    for r in [0.1, 0.5, 3.0] {
        assert_relative_eq!(
            field_magnitude(5.0e-9, r) / field_magnitude(5.0e-9, 2.0 * r),
            4.0,
            max_relative = 1.0e-12
        );
    }
}

#[test]
fn vector_and_scalar_paths_agree_off_source() {
    let q = Charge::new(0.0, 0.0, -7.0e-9);
    let p = R2::new(0.6, -0.8);
    assert_relative_eq!(field_from_charge(&q, p).magnitude(), field_magnitude(q.q(), p.norm()), max_relative = 1.0e-12);
}

#[test]
fn force_magnitude_is_symmetric() {
    for (q1, q2, r) in [(1.0e-9, -3.0e-9, 0.2), (-2.5e-6, -4.0e-9, 1.7), (0.0, 1.0, 1.0)] {
        assert_eq!(force_magnitude(q1, q2, r), force_magnitude(q2, q1, r));
    }
}

#[test]
fn positive_charge_field_points_outward_on_x_axis() {
    let q = [Charge::new(0.0, 0.0, 1.0e-9)];
    let right = total_field(&q, R2::new(1.0, 0.0));
    let left = total_field(&q, R2::new(-1.0, 0.0));
    assert!(right.ex > 0.0 && left.ex < 0.0);
    assert_eq!(right.magnitude(), left.magnitude());
}

#[test]
fn equal_same_sign_charges_cancel_at_midpoint() {
    for d in [0.25, 1.0, 4.0] {
        let charges = [Charge::new(-d, 0.0, 3.0e-9), Charge::new(d, 0.0, 3.0e-9)];
        let e = total_field(&charges, R2::zeros());
        assert_relative_eq!(e.ex, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(e.ey, 0.0, epsilon = 1.0e-12);
    }
}

#[test]
fn grid_nodes_match_pointwise_field_within_regularization() {
    let charges = [Charge::new(-0.5, 0.0, 1.0e-9), Charge::new(0.5, 0.0, -1.0e-9)];
    let grid = sample_grid(&charges, 2.0, 41, 41);
    for target in [R2::new(0.0, 0.0), R2::new(1.0, 1.0), R2::new(-1.5, 0.5)] {
        let (row, col) = grid.nearest_node(target);
        let node = grid.node(row, col);
        assert_relative_eq!(node.x, target.x, epsilon = 1.0e-12);
        assert_relative_eq!(node.y, target.y, epsilon = 1.0e-12);
        let exact = total_field(&charges, node);
        let sampled = grid.field_at(row, col);
        assert_relative_eq!(sampled.ex, exact.ex, max_relative = 1.0e-9);
        assert_relative_eq!(sampled.ey, exact.ey, epsilon = 1.0e-6, max_relative = 1.0e-9);
    }
}

#[test]
fn grid_supports_any_number_of_charges() {
    let one = sample_grid(&[Charge::new(0.0, 0.0, 1.0e-9)], 1.0, 5, 5);
    let three = sample_grid(
        &[Charge::new(0.0, 0.0, 1.0e-9), Charge::new(0.3, 0.3, 1.0e-9), Charge::new(-0.3, 0.3, 1.0e-9)],
        1.0,
        5,
        5,
    );
    assert_eq!(one.shape(), three.shape());
    assert!(three.magnitude()[(0, 0)] > one.magnitude()[(0, 0)]);
}

#[test]
fn empty_analysis_is_not_an_error() {
    let analysis = analyze(1.0e-9, &[], &[]);
    assert!(analysis.is_empty());
}

#[test]
fn sensor_on_source_reports_infinite_field() {
    let analysis = analyze(1.0e-9, &[], &[SensorPoint::new(0.0, 0.0)]);
    assert_eq!(analysis.records[0].field_magnitude, f64::INFINITY);
    assert_eq!(format_magnitude(analysis.records[0].field_magnitude, "N/C"), "undefined at r = 0");
}

#[test]
fn centimeter_input_matches_meter_input() {
    let cm = SimulationConfig::default().with_length_unit(LengthUnit::Centimeter);
    let m = SimulationConfig::default();
    let from_cm = Interaction::new(&cm, 2.0e-9, 150.0, Side::Right, -1.0e-9).evaluate();
    let from_m = Interaction::new(&m, 2.0e-9, 1.5, Side::Right, -1.0e-9).evaluate();
    assert_relative_eq!(from_cm.total.ex, from_m.total.ex, max_relative = 1.0e-12);
    assert_relative_eq!(from_cm.separation, from_m.separation, max_relative = 1.0e-12);

    let scaled = Charge::from_input(30.0, -40.0, 1.0, LengthUnit::Centimeter, ChargeUnit::NanoCoulomb);
    let direct = Charge::new(0.3, -0.4, 1.0e-9);
    let p = R2::new(1.0, 1.0);
    let a = field_from_charge(&scaled, p);
    let b = field_from_charge(&direct, p);
    assert_relative_eq!(a.ex, b.ex, max_relative = 1.0e-12);
    assert_relative_eq!(a.ey, b.ey, max_relative = 1.0e-12);
}

#[test]
fn run_scenario_writes_report_and_grid() {
    let config = SimulationConfig::default().with_resolution(4, 3);
    let scenario = Superposition::new(&config, 1.0e-9, -1.0e-9, 1.0, Some(0.25));
    let mut report = Vec::new();
    let mut grid = Vec::new();
    let outcome = run_scenario(&scenario, &config, &mut report, &mut grid).expect("in-memory run");
    assert!(outcome.total.ex > 0.0);
    let report = String::from_utf8(report).expect("utf8");
    assert!(report.starts_with("Superposition of Electric Fields"));
    assert_eq!(String::from_utf8(grid).expect("utf8").lines().count(), 1 + 12);
}

#[test]
fn run_scenario_stops_on_empty_quantitative_input() {
    let config = SimulationConfig::default().with_resolution(10, 10);
    let scenario = Quantitative::new(&config, 1.0e-9, &[], &[]);
    let mut report = Vec::new();
    let mut grid = Vec::new();
    let err = run_scenario(&scenario, &config, &mut report, &mut grid).unwrap_err();
    assert!(matches!(err, CoulombFieldError::Simulation(SimulationError::NothingToEvaluate(_))));
    assert!(report.is_empty());
    assert!(grid.is_empty());
}

#[test]
fn run_scenario_rejects_grids_over_the_limit() {
    let config = SimulationConfig::default().with_limits(GridLimits { max_points: 100 });
    let scenario = FieldLines::single(1.0e-9);
    let err = run_scenario(&scenario, &config, std::io::sink(), std::io::sink()).unwrap_err();
    assert!(matches!(err, CoulombFieldError::Simulation(SimulationError::GridTooLarge { .. })));
}
