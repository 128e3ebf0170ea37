//! Batch projection through an external cartographic library.
//!
//! The library itself is a collaborator: it is reached only through
//! [`ProjectionLibrary`] and [`Projector`]. This module owns the array
//! conventions: points are `2×n` single-precision arrays (row 0 x or
//! longitude, row 1 y or latitude), geographic coordinates are exchanged in
//! degrees and handed to the library in radians.

use ndarray::{Array2, ArrayView2};

use crate::error::{ProjError, ProjResult};

/// An initialised projection.
pub trait Projector {
    /// Geographic `(longitude, latitude)` in radians to projected `(x, y)`.
    fn forward(&self, lonlat: (f64, f64)) -> ProjResult<(f64, f64)>;

    /// Projected `(x, y)` to geographic `(longitude, latitude)` in radians.
    fn inverse(&self, xy: (f64, f64)) -> ProjResult<(f64, f64)>;
}

/// Builds projectors from proj4-style `key=value` parameter lists.
pub trait ProjectionLibrary {
    /// Initialises a projection from its parameter list.
    fn init(&self, params: &[String]) -> ProjResult<Box<dyn Projector>>;
}

/// Projects a `2×n` array of points.
///
/// Forward mode converts the input from degrees to radians before calling
/// the library and returns its output as-is. Inverse mode calls the library
/// and converts its output from radians to degrees. The first failing point
/// aborts the call.
pub fn project(
    lib: &dyn ProjectionLibrary,
    params: &[String],
    points: ArrayView2<'_, f32>,
    inverse: bool,
) -> ProjResult<Array2<f32>> {
    let (rows, cols) = points.dim();
    if rows != 2 {
        return Err(ProjError::BadShape { rows, cols });
    }

    let projector = lib.init(params)?;
    let mut out = Array2::<f32>::zeros((2, cols));

    for (index, (src, mut dst)) in points
        .columns()
        .into_iter()
        .zip(out.columns_mut())
        .enumerate()
    {
        let uv = (f64::from(src[0]), f64::from(src[1]));
        let result = if inverse {
            projector
                .inverse(uv)
                .map(|(lon, lat)| (lon.to_degrees(), lat.to_degrees()))
        } else {
            projector.forward((uv.0.to_radians(), uv.1.to_radians()))
        };
        let (a, b) = result.map_err(|e| {
            log::debug!("projection aborted at point {index}: {e}");
            let reason = match e {
                ProjError::Transform { reason, .. } => reason,
                other => other.to_string(),
            };
            ProjError::Transform { index, reason }
        })?;
        dst[0] = narrow(a);
        dst[1] = narrow(b);
    }

    Ok(out)
}

#[allow(clippy::cast_possible_truncation)]
fn narrow(v: f64) -> f32 {
    v as f32
}
