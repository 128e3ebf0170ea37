//! # cfspline Math
//!
//! Natural cubic spline interpolation over one- and two-dimensional sample
//! grids.
//!
//! This crate provides:
//!
//! - **Interpolation**: 1D natural cubic splines with an interval cache, and
//!   tensor-product bicubic surfaces over rectangular grids
//! - **Linear Algebra**: the tridiagonal solver behind the spline fit
//! - **Profiles**: equal-spacing resampling of polylines for sampling a
//!   surface along a path
//! - **Batch**: single-precision, all-or-nothing entry points for binding
//!   layers
//!
//! ## Design Philosophy
//!
//! - **No extrapolation**: queries outside the fitted domain are errors
//! - **Validated inputs**: shapes, point counts and abscissa ordering are
//!   checked before any solve
//! - **Shareable fits**: fitted coefficients are immutable; lookup caches
//!   are separate per-caller state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod batch;
pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod profile;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{spline_1d, spline_1d_deriv, spline_2d};
    pub use crate::error::{SplineError, SplineResult};
    pub use crate::interpolation::{
        Accelerator, BicubicSpline, CubicSpline, Grid2D, GridAccelerators, Interpolator, Spline1D,
    };
    pub use crate::profile::resample_polyline;
}

pub use error::{SplineError, SplineResult};
