//! Linear algebra utilities.
//!
//! The only system the spline fits need is tridiagonal, solved with the
//! Thomas algorithm in O(n).

use crate::error::{SplineError, SplineResult};

/// Pivots smaller than this are treated as zero.
const PIVOT_EPSILON: f64 = 1e-300;

/// Solves a tridiagonal system of equations.
///
/// The system has the form:
/// ```text
/// | b[0]  c[0]   0    ...   0      | | x[0]   |   | d[0]   |
/// | a[0]  b[1]  c[1]  ...   0      | | x[1]   |   | d[1]   |
/// |  0    a[1]  b[2]  ...   0      | | x[2]   | = | d[2]   |
/// | ...   ...   ...   ...  ...     | | ...    |   | ...    |
/// |  0     0     0   a[n-2] b[n-1] | | x[n-1] |   | d[n-1] |
/// ```
///
/// # Arguments
///
/// * `a` - Lower diagonal (length n-1)
/// * `b` - Main diagonal (length n)
/// * `c` - Upper diagonal (length n-1)
/// * `d` - Right-hand side (length n)
///
/// # Returns
///
/// Solution vector x.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> SplineResult<Vec<f64>> {
    let n = b.len();

    if n == 0 {
        return Ok(vec![]);
    }

    if a.len() != n - 1 {
        return Err(SplineError::dimension_mismatch("lower diagonal", n - 1, a.len()));
    }
    if c.len() != n - 1 {
        return Err(SplineError::dimension_mismatch("upper diagonal", n - 1, c.len()));
    }
    if d.len() != n {
        return Err(SplineError::dimension_mismatch("right-hand side", n, d.len()));
    }

    if b[0].abs() < PIVOT_EPSILON {
        return Err(SplineError::SingularMatrix);
    }

    // Forward elimination
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if n > 1 {
        c_prime[0] = c[0] / b[0];
    }
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let denom = b[i] - a[i - 1] * c_prime[i - 1];
        if denom.abs() < PIVOT_EPSILON {
            return Err(SplineError::SingularMatrix);
        }

        if i < n - 1 {
            c_prime[i] = c[i] / denom;
        }
        d_prime[i] = (d[i] - a[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];

    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}
