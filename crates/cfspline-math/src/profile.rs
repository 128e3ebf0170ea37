//! Equal-spacing resampling of polylines.
//!
//! Profiles across a gridded field are given as a handful of vertices; to
//! sample the field along them the path is first walked at a fixed step.

use crate::error::{SplineError, SplineResult};

/// Resamples a polyline at a fixed arc-length step.
///
/// The first vertex is always emitted. Walking along the path, a point is
/// emitted every `interval` units of distance; distance left over at a
/// vertex carries into the next segment, so spacing is measured along the
/// path rather than per segment. The final vertex is only emitted if it
/// falls exactly on a step. Zero-length segments are skipped.
///
/// # Errors
///
/// - [`SplineError::InsufficientPoints`] if `vertices` is empty
/// - [`SplineError::InvalidInput`] if `interval` is not a positive finite
///   number or a vertex is not finite
///
/// # Example
///
/// ```rust
/// use cfspline_math::profile::resample_polyline;
///
/// let path = resample_polyline(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0)], 2.0).unwrap();
/// assert_eq!(path, vec![(0.0, 0.0), (2.0, 0.0), (3.0, 1.0)]);
/// ```
pub fn resample_polyline(vertices: &[(f64, f64)], interval: f64) -> SplineResult<Vec<(f64, f64)>> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(SplineError::invalid_input(format!(
            "profile interval must be positive, got {interval}"
        )));
    }
    let Some(&start) = vertices.first() else {
        return Err(SplineError::insufficient_points(1, 0));
    };
    if let Some(i) = vertices
        .iter()
        .position(|(x, y)| !(x.is_finite() && y.is_finite()))
    {
        return Err(SplineError::invalid_input(format!(
            "profile vertex {i} is not finite"
        )));
    }

    let mut points = vec![start];
    // Distance walked since the last emitted point.
    let mut carried = 0.0;

    for pair in vertices.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = dx.hypot(dy);
        if length == 0.0 {
            continue;
        }
        let (cos, sin) = (dx / length, dy / length);

        // Distance along this segment of the next point to emit.
        let mut along = interval - carried;
        while along <= length {
            points.push((x0 + along * cos, y0 + along * sin));
            along += interval;
        }
        carried = length - (along - interval);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_line() {
        let path = resample_polyline(&[(0.0, 0.0), (0.0, 4.0)], 1.0).unwrap();
        assert_eq!(
            path,
            vec![(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0)]
        );
    }

    #[test]
    fn test_spacing_carries_round_corners() {
        // 1.5 along x, then 1.5 along y: the second step lands 0.5 past the corner.
        let path = resample_polyline(&[(0.0, 0.0), (1.5, 0.0), (1.5, 1.5)], 1.0).unwrap();
        assert_eq!(path.len(), 4);
        assert_relative_eq!(path[1].0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(path[2].0, 1.5, epsilon = 1e-12);
        assert_relative_eq!(path[2].1, 0.5, epsilon = 1e-12);
        assert_relative_eq!(path[3].1, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_diagonal_spacing() {
        let path = resample_polyline(&[(0.0, 0.0), (3.0, 4.0)], 2.5).unwrap();
        assert_eq!(path.len(), 3);
        assert_relative_eq!(path[1].0, 1.5, epsilon = 1e-12);
        assert_relative_eq!(path[1].1, 2.0, epsilon = 1e-12);
        assert_relative_eq!(path[2].0, 3.0, epsilon = 1e-12);
        assert_relative_eq!(path[2].1, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_consecutive_points_are_interval_apart_along_path() {
        let vertices = [(0.0, 0.0), (2.3, 0.0), (2.3, 1.1), (5.0, 3.0)];
        let path = resample_polyline(&vertices, 0.7).unwrap();
        let total: f64 = vertices
            .windows(2)
            .map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1))
            .sum();
        assert_eq!(path.len(), (total / 0.7).floor() as usize + 1);
    }

    #[test]
    fn test_single_vertex_and_repeated_vertices() {
        assert_eq!(resample_polyline(&[(1.0, 2.0)], 0.5).unwrap(), vec![(1.0, 2.0)]);
        let path = resample_polyline(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)], 0.5).unwrap();
        assert_eq!(path, vec![(0.0, 0.0), (0.5, 0.0), (1.0, 0.0)]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            resample_polyline(&[], 1.0).unwrap_err(),
            SplineError::insufficient_points(1, 0)
        );
        assert!(matches!(
            resample_polyline(&[(0.0, 0.0), (1.0, 0.0)], 0.0),
            Err(SplineError::InvalidInput { .. })
        ));
        assert!(matches!(
            resample_polyline(&[(0.0, 0.0), (1.0, 0.0)], f64::NAN),
            Err(SplineError::InvalidInput { .. })
        ));
        assert!(matches!(
            resample_polyline(&[(0.0, 0.0), (f64::INFINITY, 0.0)], 1.0),
            Err(SplineError::InvalidInput { .. })
        ));
    }
}
