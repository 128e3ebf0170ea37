//! Bicubic spline interpolation on a rectangular grid.
//!
//! For each y-row of the grid, a natural cubic spline is built along `x`.
//! For a query `(x, y)` the row splines are evaluated at `x`, producing one
//! value per row; those values are fitted along `y` by a transient spline
//! that is evaluated at `y` and then dropped.

use ndarray::Array2;

use crate::error::{SplineError, SplineResult};
use crate::interpolation::cubic_spline::{check_abscissas, MIN_POINTS};
use crate::interpolation::{Accelerator, CubicSpline};
use crate::profile::resample_polyline;

/// A rectangular sample grid.
///
/// `z[[i, j]]` is the sample at `(xs[i], ys[j])`, so `z` has shape
/// `(xs.len(), ys.len())`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    xs: Vec<f64>,
    ys: Vec<f64>,
    z: Array2<f64>,
}

impl Grid2D {
    /// Creates a grid, checking that `z` matches the axis lengths.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, z: Array2<f64>) -> SplineResult<Self> {
        let (rows, cols) = z.dim();
        if rows != xs.len() {
            return Err(SplineError::dimension_mismatch("z rows", xs.len(), rows));
        }
        if cols != ys.len() {
            return Err(SplineError::dimension_mismatch("z columns", ys.len(), cols));
        }
        Ok(Self { xs, ys, z })
    }

    /// Samples `f(x, y)` at every node of the axes.
    pub fn from_fn(xs: Vec<f64>, ys: Vec<f64>, f: impl Fn(f64, f64) -> f64) -> Self {
        let z = Array2::from_shape_fn((xs.len(), ys.len()), |(i, j)| f(xs[i], ys[j]));
        Self { xs, ys, z }
    }

    /// The x-axis abscissas.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y-axis abscissas.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The sample matrix, shape `(m, k)`.
    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }

    /// Grid shape `(m, k)`.
    pub fn dim(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }
}

/// Lookup caches for one [`BicubicSpline`]: one per row spline plus one for
/// the column direction.
#[derive(Debug, Clone, Default)]
pub struct GridAccelerators {
    rows: Vec<Accelerator>,
    column: Accelerator,
}

impl GridAccelerators {
    /// Creates caches for a surface with `rows` y-rows.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![Accelerator::new(); rows],
            column: Accelerator::new(),
        }
    }

    /// Per-row caches.
    pub fn rows(&self) -> &[Accelerator] {
        &self.rows
    }

    /// The column-direction cache.
    pub fn column(&self) -> &Accelerator {
        &self.column
    }
}

/// Bicubic spline interpolation on a rectangular grid.
///
/// The fitted row splines are immutable; evaluation state lives in
/// [`GridAccelerators`], so a surface can be shared between threads.
#[derive(Debug, Clone)]
pub struct BicubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// One cubic spline per y-row, interpolating along x.
    row_splines: Vec<CubicSpline>,
}

impl BicubicSpline {
    /// Build a bicubic spline on the grid.
    ///
    /// Both axes must be strictly increasing and have at least 3 elements.
    /// Any row that fails to fit aborts construction with that row's error.
    pub fn new(grid: &Grid2D) -> SplineResult<Self> {
        let (nx, ny) = grid.dim();
        if nx < MIN_POINTS {
            return Err(SplineError::insufficient_points(MIN_POINTS, nx));
        }
        if ny < MIN_POINTS {
            return Err(SplineError::insufficient_points(MIN_POINTS, ny));
        }
        check_abscissas(grid.ys())?;

        // Build one spline per y-row
        let row_splines = grid
            .z()
            .columns()
            .into_iter()
            .map(|row| CubicSpline::new(grid.xs().to_vec(), row.to_vec()))
            .collect::<SplineResult<Vec<_>>>()?;

        log::debug!("fitted bicubic spline over {nx}x{ny} grid");

        Ok(Self {
            xs: grid.xs().to_vec(),
            ys: grid.ys().to_vec(),
            row_splines,
        })
    }

    /// Builds the grid and the surface in one step.
    pub fn from_arrays(xs: Vec<f64>, ys: Vec<f64>, z: Array2<f64>) -> SplineResult<Self> {
        Self::new(&Grid2D::new(xs, ys, z)?)
    }

    /// Lower bound of the x domain.
    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    /// Upper bound of the x domain.
    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Lower bound of the y domain.
    pub fn y_min(&self) -> f64 {
        self.ys[0]
    }

    /// Upper bound of the y domain.
    pub fn y_max(&self) -> f64 {
        self.ys[self.ys.len() - 1]
    }

    /// Returns true if `(x, y)` lies inside the fitted rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min() && x <= self.x_max() && y >= self.y_min() && y <= self.y_max()
    }

    /// The per-row splines along x.
    pub fn row_splines(&self) -> &[CubicSpline] {
        &self.row_splines
    }

    /// Fresh caches sized for this surface.
    pub fn accelerators(&self) -> GridAccelerators {
        GridAccelerators::new(self.row_splines.len())
    }

    /// Evaluates every row spline at `x`.
    pub fn row_values(&self, x: f64, acc: &mut GridAccelerators) -> SplineResult<Vec<f64>> {
        self.check_accelerators(acc)?;
        self.row_splines
            .iter()
            .zip(acc.rows.iter_mut())
            .map(|(spline, row_acc)| spline.eval(x, row_acc))
            .collect()
    }

    /// Fits the column-direction spline through one value per row.
    ///
    /// This is re-solved for every query point; nothing is reused across
    /// queries.
    pub fn transient_solve(&self, column: Vec<f64>) -> SplineResult<CubicSpline> {
        CubicSpline::new(self.ys.clone(), column)
    }

    /// Evaluates the surface at a single point.
    pub fn eval_point(&self, x: f64, y: f64, acc: &mut GridAccelerators) -> SplineResult<f64> {
        let column = self.row_values(x, acc)?;
        let y_spline = self.transient_solve(column)?;
        y_spline.eval(y, &mut acc.column)
    }

    /// Evaluates a batch of `(x, y)` points with fresh caches.
    ///
    /// Fails on the first error; no partial results are returned.
    pub fn evaluate(&self, points: &[(f64, f64)]) -> SplineResult<Vec<f64>> {
        self.evaluate_with(points, &mut self.accelerators())
    }

    /// Evaluates a batch of `(x, y)` points with caller-held caches.
    pub fn evaluate_with(
        &self,
        points: &[(f64, f64)],
        acc: &mut GridAccelerators,
    ) -> SplineResult<Vec<f64>> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                self.eval_point(x, y, acc).map_err(|e| {
                    log::debug!("2D batch aborted at point {i} ({x}, {y}): {e}");
                    e
                })
            })
            .collect()
    }

    /// Samples the surface along a polyline.
    ///
    /// The polyline is resampled every `interval` units of arc length;
    /// resampled points outside the grid are dropped and the rest are
    /// evaluated. Returns `(x, y, z)` triples in path order.
    pub fn sample_profile(
        &self,
        vertices: &[(f64, f64)],
        interval: f64,
    ) -> SplineResult<Vec<(f64, f64, f64)>> {
        let path = resample_polyline(vertices, interval)?;
        let inside: Vec<(f64, f64)> = path
            .into_iter()
            .filter(|&(x, y)| self.contains(x, y))
            .collect();
        let values = self.evaluate(&inside)?;
        Ok(inside
            .into_iter()
            .zip(values)
            .map(|((x, y), z)| (x, y, z))
            .collect())
    }

    fn check_accelerators(&self, acc: &GridAccelerators) -> SplineResult<()> {
        if acc.rows.len() != self.row_splines.len() {
            return Err(SplineError::dimension_mismatch(
                "row accelerators",
                self.row_splines.len(),
                acc.rows.len(),
            ));
        }
        Ok(())
    }
}
