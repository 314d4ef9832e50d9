use coulomb_field::prelude::*;

fn main() -> Result<(), CoulombFieldError> {
    // Two +2 nC charges at x = ±50 cm; sweep the sensor along the axis between them.
    let config = SimulationConfig::from_unit_symbols("superposition_sweep", "cm", "C")?;

    println!("sensor_x(m), Ex(N/C), Ey(N/C), |E|(N/C)");
    for sensor_cm in [-40.0_f64, -20.0, -10.0, 0.0, 10.0, 20.0, 40.0] {
        let scenario = Superposition::new(&config, 2.0e-9, 2.0e-9, 50.0, Some(sensor_cm));
        let out = scenario.evaluate();
        println!(
            "{:.3}, {:.6e}, {:.6e}, {:.6e}",
            out.sensor.x,
            out.total.ex,
            out.total.ey,
            out.total.magnitude()
        );
    }

    // Full report for the midpoint plus a coarse grid for plotting.
    let midpoint = Superposition::new(&config, 2.0e-9, 2.0e-9, 50.0, None);
    let coarse = config.clone().with_resolution(25, 25);
    let stdout = std::io::stdout();
    run_scenario(&midpoint, &coarse, stdout.lock(), std::io::sink())?;
    Ok(())
}
