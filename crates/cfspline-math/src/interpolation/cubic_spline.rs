//! Natural cubic spline interpolation.

use std::sync::Arc;

use crate::error::{SplineError, SplineResult};
use crate::interpolation::{Accelerator, Interpolator};
use crate::linear_algebra::solve_tridiagonal;

/// Minimum number of knots for a natural cubic fit.
pub const MIN_POINTS: usize = 3;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints.
///
/// The fitted coefficients are immutable. Evaluation takes an
/// [`Accelerator`] so that several callers can share one spline while each
/// keeps its own lookup cache.
///
/// # Example
///
/// ```rust
/// use cfspline_math::interpolation::{Accelerator, CubicSpline};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let mut acc = Accelerator::new();
/// let y = spline.eval(1.5, &mut acc).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// - [`SplineError::DimensionMismatch`] if the lengths differ
    /// - [`SplineError::InsufficientPoints`] for fewer than 3 points
    /// - [`SplineError::NonMonotonicInput`] if `xs` is not strictly increasing
    /// - [`SplineError::InvalidInput`] if a value is not finite
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> SplineResult<Self> {
        if xs.len() != ys.len() {
            return Err(SplineError::dimension_mismatch("ys", xs.len(), ys.len()));
        }
        if xs.len() < MIN_POINTS {
            return Err(SplineError::insufficient_points(MIN_POINTS, xs.len()));
        }

        check_abscissas(&xs)?;
        if let Some(i) = ys.iter().position(|y| !y.is_finite()) {
            return Err(SplineError::invalid_input(format!(
                "y[{i}] = {} is not finite",
                ys[i]
            )));
        }

        let y2s = compute_second_derivatives(&xs, &ys)?;

        Ok(Self { xs, ys, y2s })
    }

    /// Creates a spline from borrowed slices.
    pub fn from_slices(xs: &[f64], ys: &[f64]) -> SplineResult<Self> {
        Self::new(xs.to_vec(), ys.to_vec())
    }

    /// Knot abscissas.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Knot ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Second derivatives at the knots.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.y2s
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a fitted spline has at least three knots.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Evaluates the spline at `x`.
    pub fn eval(&self, x: f64, acc: &mut Accelerator) -> SplineResult<f64> {
        let seg = self.segment(x, acc)?;
        Ok(seg.y_lo * seg.a
            + seg.y_hi * seg.b
            + ((seg.a * seg.a * seg.a - seg.a) * seg.y2_lo
                + (seg.b * seg.b * seg.b - seg.b) * seg.y2_hi)
                * (seg.h * seg.h)
                / 6.0)
    }

    /// Evaluates the first derivative at `x`.
    pub fn eval_deriv(&self, x: f64, acc: &mut Accelerator) -> SplineResult<f64> {
        let seg = self.segment(x, acc)?;
        Ok((seg.y_hi - seg.y_lo) / seg.h
            - (3.0 * seg.a * seg.a - 1.0) / 6.0 * seg.h * seg.y2_lo
            + (3.0 * seg.b * seg.b - 1.0) / 6.0 * seg.h * seg.y2_hi)
    }

    /// Evaluates the second derivative at `x`.
    pub fn eval_deriv2(&self, x: f64, acc: &mut Accelerator) -> SplineResult<f64> {
        let seg = self.segment(x, acc)?;
        Ok(seg.a * seg.y2_lo + seg.b * seg.y2_hi)
    }

    /// Locates `x` and gathers the bounding knot data.
    fn segment(&self, x: f64, acc: &mut Accelerator) -> SplineResult<Segment> {
        let min = self.xs[0];
        let max = self.xs[self.xs.len() - 1];
        // Written so that NaN fails the check.
        if !(x >= min && x <= max) {
            return Err(SplineError::out_of_domain(x, min, max));
        }

        let i = acc.find(&self.xs, x);

        let h = self.xs[i + 1] - self.xs[i];
        Ok(Segment {
            h,
            a: (self.xs[i + 1] - x) / h,
            b: (x - self.xs[i]) / h,
            y_lo: self.ys[i],
            y_hi: self.ys[i + 1],
            y2_lo: self.y2s[i],
            y2_hi: self.y2s[i + 1],
        })
    }
}

/// Knot data for the interval containing a query, with the normalized
/// positions `a = (x_hi - x) / h` and `b = (x - x_lo) / h`.
struct Segment {
    h: f64,
    a: f64,
    b: f64,
    y_lo: f64,
    y_hi: f64,
    y2_lo: f64,
    y2_hi: f64,
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> SplineResult<f64> {
        self.eval(x, &mut Accelerator::new())
    }

    fn derivative(&self, x: f64) -> SplineResult<f64> {
        self.eval_deriv(x, &mut Accelerator::new())
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// A fitted spline bundled with its own lookup cache.
///
/// The coefficient table sits behind an [`Arc`]; [`Spline1D::share`] hands
/// out further handles over the same table, each with a fresh accelerator,
/// so that threads never contend on a cache.
#[derive(Debug, Clone)]
pub struct Spline1D {
    spline: Arc<CubicSpline>,
    acc: Accelerator,
}

impl Spline1D {
    /// Fits a natural cubic spline through `(xs, ys)`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> SplineResult<Self> {
        Ok(Self::from_spline(Arc::new(CubicSpline::new(xs, ys)?)))
    }

    /// Wraps an existing coefficient table.
    pub fn from_spline(spline: Arc<CubicSpline>) -> Self {
        Self {
            spline,
            acc: Accelerator::new(),
        }
    }

    /// Another handle over the same coefficients with its own cache.
    #[must_use]
    pub fn share(&self) -> Self {
        Self::from_spline(Arc::clone(&self.spline))
    }

    /// Evaluates the spline at `q`.
    pub fn evaluate(&mut self, q: f64) -> SplineResult<f64> {
        self.spline.eval(q, &mut self.acc)
    }

    /// Evaluates the first derivative at `q`.
    pub fn evaluate_derivative(&mut self, q: f64) -> SplineResult<f64> {
        self.spline.eval_deriv(q, &mut self.acc)
    }

    /// Evaluates the second derivative at `q`.
    pub fn evaluate_second_derivative(&mut self, q: f64) -> SplineResult<f64> {
        self.spline.eval_deriv2(q, &mut self.acc)
    }

    /// The shared coefficient table.
    pub fn spline(&self) -> &Arc<CubicSpline> {
        &self.spline
    }

    /// This handle's lookup cache.
    pub fn accelerator(&self) -> &Accelerator {
        &self.acc
    }
}

/// Rejects non-finite or non-increasing abscissas.
pub(crate) fn check_abscissas(xs: &[f64]) -> SplineResult<()> {
    if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
        return Err(SplineError::invalid_input(format!(
            "x[{i}] = {} is not finite",
            xs[i]
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(SplineError::NonMonotonicInput {
                index: i,
                previous: xs[i - 1],
                value: xs[i],
            });
        }
    }
    Ok(())
}

/// Computes the second derivatives for natural cubic spline.
///
/// For each interior knot `i`:
///
/// `h[i-1] y2[i-1] + 2 (h[i-1] + h[i]) y2[i] + h[i] y2[i+1]
///     = 6 (s[i] - s[i-1])`
///
/// with `y2[0] = y2[n-1] = 0`.
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> SplineResult<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slopes: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, &hi)| (w[1] - w[0]) / hi)
        .collect();

    let interior = n - 2;
    let mut lower = Vec::with_capacity(interior.saturating_sub(1));
    let mut diag = Vec::with_capacity(interior);
    let mut upper = Vec::with_capacity(interior.saturating_sub(1));
    let mut rhs = Vec::with_capacity(interior);

    for i in 1..n - 1 {
        diag.push(2.0 * (h[i - 1] + h[i]));
        rhs.push(6.0 * (slopes[i] - slopes[i - 1]));
        if i > 1 {
            lower.push(h[i - 1]);
        }
        if i < n - 2 {
            upper.push(h[i]);
        }
    }

    let inner = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

    let mut y2s = Vec::with_capacity(n);
    y2s.push(0.0);
    y2s.extend(inner);
    y2s.push(0.0);
    Ok(y2s)
}
