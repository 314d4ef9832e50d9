//! Lattice sampling of superposed fields.
//!
//! Each charge is evaluated over the whole lattice into its own pair of component arrays;
//! the arrays are then summed. With the `parallel` feature the per-charge arrays are
//! produced on the `rayon` pool. Magnitudes are derived from the summed components only.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constants::COULOMB_CONSTANT;
use crate::math::{hypot_elementwise, linspace, R2, Samples, Scalar};

use super::charge::Charge;
use super::electric::{FieldVector, NearFieldPolicy};

/// Floor added to magnitudes before taking `log10`.
pub const LOG_MAGNITUDE_FLOOR: Scalar = 1.0e-20;

/// Rectangular lattice over `[-range, +range]` on both axes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    range_m: Scalar,
    nx: usize,
    ny: usize,
}

impl GridSpec {
    /// Creates a lattice of `nx × ny` nodes. The range is taken by magnitude and each
    /// resolution is raised to at least one node.
    #[must_use]
    pub fn new(range_m: Scalar, nx: usize, ny: usize) -> Self {
        Self { range_m: range_m.abs(), nx: nx.max(1), ny: ny.max(1) }
    }

    /// Square lattice with `n` nodes per axis.
    #[must_use]
    pub fn square(range_m: Scalar, n: usize) -> Self {
        Self::new(range_m, n, n)
    }

    /// Half-width of the lattice in meters.
    #[must_use]
    pub const fn range(&self) -> Scalar {
        self.range_m
    }

    /// Nodes along x.
    #[must_use]
    pub const fn nx(&self) -> usize {
        self.nx
    }

    /// Nodes along y.
    #[must_use]
    pub const fn ny(&self) -> usize {
        self.ny
    }

    /// Total node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nx * self.ny
    }

    /// X coordinates of the columns.
    #[must_use]
    pub fn xs(&self) -> Vec<Scalar> {
        linspace(-self.range_m, self.range_m, self.nx)
    }

    /// Y coordinates of the rows.
    #[must_use]
    pub fn ys(&self) -> Vec<Scalar> {
        linspace(-self.range_m, self.range_m, self.ny)
    }
}

/// Sampled field components on a lattice, shape `(ny, nx)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    spec: GridSpec,
    xs: Vec<Scalar>,
    ys: Vec<Scalar>,
    ex: Samples,
    ey: Samples,
}

impl FieldGrid {
    /// Lattice the samples were drawn from. A decimated grid keeps its source lattice,
    /// so use [`FieldGrid::xs`] and [`FieldGrid::ys`] for the retained nodes.
    #[must_use]
    pub const fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Column coordinates (meters).
    #[must_use]
    pub fn xs(&self) -> &[Scalar] {
        &self.xs
    }

    /// Row coordinates (meters).
    #[must_use]
    pub fn ys(&self) -> &[Scalar] {
        &self.ys
    }

    /// `Ex` samples.
    #[must_use]
    pub const fn ex(&self) -> &Samples {
        &self.ex
    }

    /// `Ey` samples.
    #[must_use]
    pub const fn ey(&self) -> &Samples {
        &self.ey
    }

    /// `(ny, nx)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.ex.shape()
    }

    /// `(x_min, x_max, y_min, y_max)` in meters, taken from the outermost nodes.
    #[must_use]
    pub fn extent(&self) -> (Scalar, Scalar, Scalar, Scalar) {
        let (x_min, x_max) = axis_bounds(&self.xs);
        let (y_min, y_max) = axis_bounds(&self.ys);
        (x_min, x_max, y_min, y_max)
    }

    /// Coordinates of node `(row, col)`.
    #[must_use]
    pub fn node(&self, row: usize, col: usize) -> R2 {
        R2::new(self.xs[col], self.ys[row])
    }

    /// Field vector at node `(row, col)`.
    #[must_use]
    pub fn field_at(&self, row: usize, col: usize) -> FieldVector {
        FieldVector::new(self.ex[(row, col)], self.ey[(row, col)])
    }

    /// Node closest to `point`, as `(row, col)`.
    #[must_use]
    pub fn nearest_node(&self, point: R2) -> (usize, usize) {
        (nearest_index(&self.ys, point.y), nearest_index(&self.xs, point.x))
    }

    /// Elementwise `sqrt(Ex² + Ey²)`.
    #[must_use]
    pub fn magnitude(&self) -> Samples {
        hypot_elementwise(&self.ex, &self.ey)
    }

    /// `log10(|E| + 1e-20)`, the usual heatmap view.
    #[must_use]
    pub fn log_magnitude(&self) -> Samples {
        self.log_magnitude_with_floor(LOG_MAGNITUDE_FLOOR)
    }

    /// `log10(|E| + floor)`.
    #[must_use]
    pub fn log_magnitude_with_floor(&self, floor: Scalar) -> Samples {
        self.magnitude().map(|m| (m + floor).log10())
    }

    /// Thins the lattice to every `step`-th node on both axes. The first and last nodes
    /// are always kept, so the extent is unchanged. Quiver plots use this to avoid overdrawing.
    #[must_use]
    pub fn decimate(&self, step: usize) -> Self {
        let rows = thinned_indices(self.ys.len(), step);
        let cols = thinned_indices(self.xs.len(), step);
        let pick = |m: &Samples| Samples::from_fn(rows.len(), cols.len(), |i, j| m[(rows[i], cols[j])]);
        Self {
            spec: self.spec,
            xs: cols.iter().map(|&j| self.xs[j]).collect(),
            ys: rows.iter().map(|&i| self.ys[i]).collect(),
            ex: pick(&self.ex),
            ey: pick(&self.ey),
        }
    }
}

fn thinned_indices(len: usize, step: usize) -> Vec<usize> {
    let mut picked: Vec<usize> = (0..len).step_by(step.max(1)).collect();
    if let Some(last) = len.checked_sub(1) {
        if picked.last() != Some(&last) {
            picked.push(last);
        }
    }
    picked
}

fn axis_bounds(axis: &[Scalar]) -> (Scalar, Scalar) {
    match (axis.first(), axis.last()) {
        (Some(&lo), Some(&hi)) => (lo.min(hi), lo.max(hi)),
        _ => (0.0, 0.0),
    }
}

fn nearest_index(axis: &[Scalar], value: Scalar) -> usize {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map_or(0, |(i, _)| i)
}

fn charge_contribution(charge: &Charge, xs: &[Scalar], ys: &[Scalar], policy: NearFieldPolicy) -> (Samples, Samples) {
    let kq = COULOMB_CONSTANT * charge.q();
    let mut ex = Samples::zeros(ys.len(), xs.len());
    let mut ey = Samples::zeros(ys.len(), xs.len());
    for (i, &y) in ys.iter().enumerate() {
        let dy = y - charge.y();
        for (j, &x) in xs.iter().enumerate() {
            let dx = x - charge.x();
            let raw = dx * dx + dy * dy;
            if raw == 0.0 && !matches!(policy, NearFieldPolicy::Regularize { .. }) {
                if matches!(policy, NearFieldPolicy::PropagateInfinity) {
                    ex[(i, j)] = Scalar::INFINITY;
                    ey[(i, j)] = Scalar::INFINITY;
                }
                continue;
            }
            let r2 = policy.effective_r2(raw);
            let s = kq / (r2 * r2.sqrt());
            ex[(i, j)] = s * dx;
            ey[(i, j)] = s * dy;
        }
    }
    (ex, ey)
}

#[cfg(not(feature = "parallel"))]
fn superpose(charges: &[Charge], xs: &[Scalar], ys: &[Scalar], policy: NearFieldPolicy) -> (Samples, Samples) {
    let zeros = (Samples::zeros(ys.len(), xs.len()), Samples::zeros(ys.len(), xs.len()));
    charges
        .iter()
        .map(|c| charge_contribution(c, xs, ys, policy))
        .fold(zeros, |(ex, ey), (cx, cy)| (ex + cx, ey + cy))
}

#[cfg(feature = "parallel")]
fn superpose(charges: &[Charge], xs: &[Scalar], ys: &[Scalar], policy: NearFieldPolicy) -> (Samples, Samples) {
    let (rows, cols) = (ys.len(), xs.len());
    charges
        .par_iter()
        .map(|c| charge_contribution(c, xs, ys, policy))
        .reduce(
            || (Samples::zeros(rows, cols), Samples::zeros(rows, cols)),
            |(ex, ey), (cx, cy)| (ex + cx, ey + cy),
        )
}

/// Superposed field at every node of `spec`, regularizing near sources with
/// [`NearFieldPolicy::regularized`].
#[must_use]
pub fn total_field_grid(charges: &[Charge], spec: &GridSpec) -> FieldGrid {
    total_field_grid_with(charges, spec, NearFieldPolicy::regularized())
}

/// Superposed field at every node of `spec` under an explicit singularity policy.
#[must_use]
pub fn total_field_grid_with(charges: &[Charge], spec: &GridSpec, policy: NearFieldPolicy) -> FieldGrid {
    debug!(
        "sampling {}x{} grid over ±{} m from {} charges ({:?})",
        spec.nx(),
        spec.ny(),
        spec.range(),
        charges.len(),
        policy
    );
    let xs = spec.xs();
    let ys = spec.ys();
    let (ex, ey) = superpose(charges, &xs, &ys, policy);
    FieldGrid { spec: *spec, xs, ys, ex, ey }
}

/// Samples the superposed field of `charges` on an `nx × ny` lattice spanning
/// `[-range_m, +range_m]` on both axes.
#[must_use]
pub fn sample_grid(charges: &[Charge], range_m: Scalar, nx: usize, ny: usize) -> FieldGrid {
    total_field_grid(charges, &GridSpec::new(range_m, nx, ny))
}
