//! Cubic spline interpolation over 1D series and 2D grids.
//!
//! # Available Types
//!
//! - [`CubicSpline`]: fitted natural cubic spline (immutable, shareable)
//! - [`Accelerator`]: per-caller interval cache used during evaluation
//! - [`Spline1D`]: a spline bundled with its own accelerator
//! - [`Grid2D`]: rectangular sample grid `z[i][j] = f(x_i, y_j)`
//! - [`BicubicSpline`]: tensor-product surface over a [`Grid2D`]
//! - [`GridAccelerators`]: the row and column caches of a surface
//!
//! # Evaluation Model
//!
//! | Type | Fit | Per query |
//! |------|-----|-----------|
//! | `CubicSpline` | O(n) tridiagonal solve | O(1) cached, O(log n) otherwise |
//! | `BicubicSpline` | k row fits | k row evaluations + one O(k) column fit |
//!
//! Evaluation outside the fitted domain is an error, never an
//! extrapolation.

mod accel;
mod bicubic;
mod cubic_spline;

pub use accel::Accelerator;
pub use bicubic::{BicubicSpline, Grid2D, GridAccelerators};
pub use cubic_spline::{CubicSpline, Spline1D, MIN_POINTS};

use crate::error::SplineResult;

/// Trait for stateless interpolation.
///
/// Implementations locate intervals from scratch on every call; use the
/// accelerated methods on the concrete types for repeated nearby queries.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> SplineResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> SplineResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
