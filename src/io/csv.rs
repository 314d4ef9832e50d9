//! CSV export for the rendering and reporting collaborators.

use std::io::{self, Write};

use crate::analysis::{Analysis, Measurement};
use crate::fields::FieldGrid;

/// Writes one row per lattice node: `x,y,ex,ey,magnitude`.
///
/// Rows run along x first, then y, matching the `(ny, nx)` array layout.
pub fn write_grid_csv<W: Write>(mut w: W, grid: &FieldGrid) -> io::Result<()> {
    writeln!(w, "x,y,ex,ey,magnitude")?;
    let (rows, cols) = grid.shape();
    for row in 0..rows {
        for col in 0..cols {
            let p = grid.node(row, col);
            let e = grid.field_at(row, col);
            writeln!(w, "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}", p.x, p.y, e.ex, e.ey, e.magnitude())?;
        }
    }
    Ok(())
}

/// Writes one row per analysed point: `kind,x,y,r,field,test_charge,force`.
///
/// Sensor rows leave the last two columns empty. Unbounded magnitudes are written as `inf`.
pub fn write_analysis_csv<W: Write>(mut w: W, analysis: &Analysis) -> io::Result<()> {
    writeln!(w, "kind,x,y,r,field,test_charge,force")?;
    for rec in &analysis.records {
        let head = format!(
            "{:.16e},{:.16e},{:.16e},{:.16e}",
            rec.position.x, rec.position.y, rec.distance, rec.field_magnitude
        );
        match rec.measurement {
            Measurement::Force { test_charge, force_magnitude } => {
                writeln!(w, "force,{head},{test_charge:.16e},{force_magnitude:.16e}")?;
            }
            Measurement::Sensor => writeln!(w, "sensor,{head},,")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, ForcePoint, SensorPoint};
    use crate::fields::{sample_grid, Charge};

    #[test]
    fn grid_csv_has_header_and_one_row_per_node() {
        let grid = sample_grid(&[Charge::new(0.0, 0.0, 1.0e-9)], 1.0, 3, 2);
        let mut buf = Vec::new();
        write_grid_csv(&mut buf, &grid).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,y,ex,ey,magnitude");
        assert_eq!(lines.len(), 1 + 6);
        assert!(lines[1].starts_with("-1.0000000000000000e0,-1.0000000000000000e0,"));
    }

    #[test]
    fn analysis_csv_marks_kinds_and_infinities() {
        let analysis = analyze(1.0e-9, &[ForcePoint::new(1.0, 0.0, 2.0e-9)], &[SensorPoint::new(0.0, 0.0)]);
        let mut buf = Vec::new();
        write_analysis_csv(&mut buf, &analysis).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("force,"));
        assert!(lines[2].starts_with("sensor,"));
        assert!(lines[2].contains(",inf,"), "{}", lines[2]);
        assert!(lines[2].ends_with(",,"));
    }
}
