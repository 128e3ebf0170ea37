//! Single-precision batch entry points.
//!
//! These are the operations a numeric binding layer calls. Samples and
//! queries arrive as `f32` arrays, are widened to `f64` for fitting and
//! evaluation, and results are narrowed back to `f32`. Each call is
//! all-or-nothing: the first error aborts it and no partial output is
//! returned.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{SplineError, SplineResult};
use crate::interpolation::{BicubicSpline, Grid2D, Spline1D};

fn widen(values: ArrayView1<'_, f32>) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

#[allow(clippy::cast_possible_truncation)]
fn narrow(values: Vec<f64>) -> Array1<f32> {
    values.into_iter().map(|v| v as f32).collect()
}

fn fit_1d(x: ArrayView1<'_, f32>, y: ArrayView1<'_, f32>) -> SplineResult<Spline1D> {
    Spline1D::new(widen(x), widen(y))
}

/// Interpolates `(x, y)` samples at each location.
///
/// # Example
///
/// ```rust
/// use cfspline_math::batch::spline_1d;
/// use ndarray::array;
///
/// let x = array![0.0f32, 1.0, 2.0, 3.0];
/// let y = array![0.0f32, 1.0, 0.0, 1.0];
/// let out = spline_1d(x.view(), y.view(), array![0.0f32, 3.0].view()).unwrap();
/// assert_eq!(out.len(), 2);
/// ```
pub fn spline_1d(
    x: ArrayView1<'_, f32>,
    y: ArrayView1<'_, f32>,
    locations: ArrayView1<'_, f32>,
) -> SplineResult<Array1<f32>> {
    let mut spline = fit_1d(x, y)?;
    let values = locations
        .iter()
        .map(|&q| spline.evaluate(f64::from(q)))
        .collect::<SplineResult<Vec<_>>>()
        .map_err(|e| {
            log::debug!("1D batch of {} aborted: {e}", locations.len());
            e
        })?;
    Ok(narrow(values))
}

/// First derivative of the `(x, y)` spline at each location.
pub fn spline_1d_deriv(
    x: ArrayView1<'_, f32>,
    y: ArrayView1<'_, f32>,
    locations: ArrayView1<'_, f32>,
) -> SplineResult<Array1<f32>> {
    let mut spline = fit_1d(x, y)?;
    let values = locations
        .iter()
        .map(|&q| spline.evaluate_derivative(f64::from(q)))
        .collect::<SplineResult<Vec<_>>>()
        .map_err(|e| {
            log::debug!("1D derivative batch of {} aborted: {e}", locations.len());
            e
        })?;
    Ok(narrow(values))
}

/// Interpolates a gridded field at a set of points.
///
/// * `x` - x-axis, length m
/// * `y` - y-axis, length k
/// * `z` - samples, shape `(m, k)`
/// * `locations` - query points, shape `(2, n)`: row 0 holds x, row 1 holds y
///
/// Returns n values in the order of the location columns.
pub fn spline_2d(
    x: ArrayView1<'_, f32>,
    y: ArrayView1<'_, f32>,
    z: ArrayView2<'_, f32>,
    locations: ArrayView2<'_, f32>,
) -> SplineResult<Array1<f32>> {
    let z: Array2<f64> = z.mapv(f64::from);
    let grid = Grid2D::new(widen(x), widen(y), z)?;

    if locations.nrows() != 2 {
        return Err(SplineError::dimension_mismatch(
            "location rows",
            2,
            locations.nrows(),
        ));
    }

    let surface = BicubicSpline::new(&grid)?;
    let points: Vec<(f64, f64)> = locations
        .columns()
        .into_iter()
        .map(|c| (f64::from(c[0]), f64::from(c[1])))
        .collect();

    Ok(narrow(surface.evaluate(&points)?))
}
