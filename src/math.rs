//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (positions, displacements).
pub type R2 = Vector2<Scalar>;
/// Row-major-by-convention sample array: rows follow `y`, columns follow `x`.
pub type Samples = DMatrix<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop]; both ends are exact.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| if i + 1 == n { stop } else { start + step * i as Scalar }).collect()
        }
    }
}

/// Elementwise `sqrt(a² + b²)` over two arrays of identical shape.
#[must_use]
pub fn hypot_elementwise(a: &Samples, b: &Samples) -> Samples {
    a.zip_map(b, Scalar::hypot)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(-1.0, 1.0, 0).is_empty());
        assert_eq!(linspace(-1.0, 1.0, 1), vec![-1.0]);
    }

    #[test]
    fn linspace_hits_stop_exactly() {
        let v = linspace(-5.0, 5.0, 300);
        assert_eq!(v.first(), Some(&-5.0));
        assert_eq!(v.last(), Some(&5.0));
    }

    #[test]
    fn hypot_matches_euclidean_norm() {
        let a = Samples::from_element(2, 3, 3.0);
        let b = Samples::from_element(2, 3, 4.0);
        let m = hypot_elementwise(&a, &b);
        assert_eq!(m.shape(), (2, 3));
        assert_relative_eq!(m[(1, 2)], 5.0, epsilon = 1.0e-12);
    }
}
