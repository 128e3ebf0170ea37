//! Integration tests: end-to-end behaviour of the 1D and 2D splines.
//!
//! Covers the reference scenarios for fitting and batch evaluation plus
//! property checks over randomly generated sample series and grids.

use approx::assert_relative_eq;
use cfspline_math::batch::{spline_1d, spline_2d};
use cfspline_math::prelude::*;
use ndarray::{array, Array2};
use proptest::prelude::*;

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn scenario_a_interpolates_between_knots() {
    let mut spline = Spline1D::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap();

    let mid = spline.evaluate(1.5).unwrap();
    assert!(mid > 0.0 && mid < 1.0, "Evaluate(1.5) = {mid}");

    assert!(matches!(
        spline.evaluate(-1.0),
        Err(SplineError::OutOfDomain { .. })
    ));
}

#[test]
fn scenario_b_exact_at_grid_node() {
    let grid = Grid2D::from_fn(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], |x, y| x + y);
    let surface = BicubicSpline::new(&grid).unwrap();

    let v = surface.evaluate(&[(1.0, 1.0)]).unwrap();
    assert_eq!(v.len(), 1);
    assert_relative_eq!(v[0], 2.0, epsilon = 1e-12);
}

#[test]
fn scenario_c_dimension_mismatch() {
    let err = Spline1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, SplineError::DimensionMismatch { .. }));
}

#[test]
fn scenario_d_batch_is_all_or_nothing() {
    let x = array![0.0f32, 1.0, 2.0, 3.0];
    let y = array![0.0f32, 1.0, 0.0, 1.0];
    let result = spline_1d(x.view(), y.view(), array![1.5f32, 7.0].view());
    assert!(matches!(result, Err(SplineError::OutOfDomain { .. })));

    let z = Array2::from_shape_fn((4, 4), |(i, j)| (i * j) as f32);
    let locations = array![[1.0f32, 1.0], [1.0, 3.5]];
    let result = spline_2d(x.view(), x.view(), z.view(), locations.view());
    assert!(matches!(result, Err(SplineError::OutOfDomain { .. })));
}

#[test]
fn unsorted_abscissas_rejected() {
    let err = Spline1D::new(vec![0.0, 2.0, 1.0, 3.0], vec![0.0; 4]).unwrap_err();
    assert!(matches!(err, SplineError::NonMonotonicInput { index: 2, .. }));
}

#[test]
fn derivative_consistency_on_smooth_data() {
    let xs: Vec<f64> = (0..=20).map(|i| f64::from(i) * 0.25).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (0.8 * x).cos() + 0.1 * x).collect();
    let mut spline = Spline1D::new(xs, ys).unwrap();

    let h = 1e-5;
    for k in 1..50 {
        let q = f64::from(k) * 0.1;
        let numerical =
            (spline.evaluate(q + h).unwrap() - spline.evaluate(q - h).unwrap()) / (2.0 * h);
        let analytical = spline.evaluate_derivative(q).unwrap();
        assert!(
            (analytical - numerical).abs() < 1e-3,
            "at q={q}: analytical={analytical}, numerical={numerical}"
        );
    }
}

#[test]
fn shared_coefficients_across_threads() {
    let xs: Vec<f64> = (0..50).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x / 7.0).sin()).collect();
    let base = Spline1D::new(xs, ys).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let mut local = base.share();
            std::thread::spawn(move || {
                (0..100)
                    .map(|k| local.evaluate(f64::from(t * 100 + k) * 0.1225).unwrap())
                    .sum::<f64>()
            })
        })
        .collect();

    let mut reference = base.share();
    for (t, handle) in handles.into_iter().enumerate() {
        let expected: f64 = (0..100)
            .map(|k| {
                reference
                    .evaluate(f64::from(t as u32 * 100 + k) * 0.1225)
                    .unwrap()
            })
            .sum();
        assert_relative_eq!(handle.join().unwrap(), expected, epsilon = 1e-12);
    }
}

// ============================================================================
// Properties
// ============================================================================

fn sample_series() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (3usize..16).prop_flat_map(|n| {
        (
            -50.0f64..50.0,
            prop::collection::vec(0.1f64..5.0, n - 1),
            prop::collection::vec(-100.0f64..100.0, n),
        )
            .prop_map(|(start, steps, ys)| {
                let mut xs = Vec::with_capacity(steps.len() + 1);
                xs.push(start);
                for step in steps {
                    let last = xs[xs.len() - 1];
                    xs.push(last + step);
                }
                (xs, ys)
            })
    })
}

proptest! {
    #[test]
    fn prop_interpolation_exact_at_knots((xs, ys) in sample_series()) {
        let mut spline = Spline1D::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            let v = spline.evaluate(*x).unwrap();
            prop_assert!((v - y).abs() <= 1e-9 * (1.0 + y.abs()), "at {}: {} vs {}", x, v, y);
        }
    }

    #[test]
    fn prop_domain_is_closed_knot_range(
        (xs, ys) in sample_series(),
        t in 0.0f64..=1.0,
        gap in 1e-6f64..10.0,
    ) {
        let mut spline = Spline1D::new(xs.clone(), ys).unwrap();
        let (lo, hi) = (xs[0], xs[xs.len() - 1]);

        let inside = (lo + t * (hi - lo)).clamp(lo, hi);
        prop_assert!(spline.evaluate(inside).is_ok());
        prop_assert!(spline.evaluate_derivative(inside).is_ok());

        prop_assert!(spline.evaluate(lo - gap).unwrap_err().is_out_of_domain());
        prop_assert!(spline.evaluate(hi + gap).unwrap_err().is_out_of_domain());
        prop_assert!(spline.evaluate_derivative(hi + gap).unwrap_err().is_out_of_domain());
    }

    #[test]
    fn prop_cache_never_changes_results(
        (xs, ys) in sample_series(),
        ts in prop::collection::vec(0.0f64..=1.0, 1..30),
    ) {
        let spline = CubicSpline::new(xs.clone(), ys).unwrap();
        let (lo, hi) = (xs[0], xs[xs.len() - 1]);
        let mut acc = Accelerator::new();
        for t in ts {
            let q = (lo + t * (hi - lo)).clamp(lo, hi);
            let cached = spline.eval(q, &mut acc).unwrap();
            let fresh = spline.interpolate(q).unwrap();
            prop_assert_eq!(cached, fresh);
        }
    }

    #[test]
    fn prop_surface_exact_at_grid_nodes(
        (xs, _) in sample_series(),
        (ys, _) in sample_series(),
        seed in 0.0f64..10.0,
    ) {
        let grid = Grid2D::from_fn(xs.clone(), ys.clone(), |x, y| (x * 0.3 + seed).sin() * y);
        let surface = BicubicSpline::new(&grid).unwrap();

        let points: Vec<(f64, f64)> = xs
            .iter()
            .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
            .collect();
        let values = surface.evaluate(&points).unwrap();

        for (&(x, y), v) in points.iter().zip(values) {
            let expected = (x * 0.3 + seed).sin() * y;
            prop_assert!(
                (v - expected).abs() <= 1e-8 * (1.0 + expected.abs()),
                "at ({}, {}): {} vs {}", x, y, v, expected
            );
        }
    }
}
