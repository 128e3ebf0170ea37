//! Interp1d command implementation.
//!
//! Fits a natural cubic spline to a series and evaluates it at query points.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use cfspline_math::interpolation::Spline1D;

use crate::commands::Context;
use crate::input::{load_series, parse_values};
use crate::output::{fixed, print_output, Record};

/// Arguments for the interp1d command.
#[derive(Args, Debug)]
pub struct Interp1dArgs {
    /// CSV file with `x,y` columns, x strictly increasing
    #[arg(short, long)]
    pub samples: PathBuf,

    /// Query abscissas (comma-separated, e.g. "0.5,1.25,3")
    #[arg(short, long, allow_hyphen_values = true)]
    pub at: String,

    /// Report the first derivative instead of the value
    #[arg(short, long, conflicts_with = "second_derivative")]
    pub derivative: bool,

    /// Report the second derivative instead of the value
    #[arg(long)]
    pub second_derivative: bool,
}

/// Which quantity to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantity {
    Value,
    Slope,
    Curvature,
}

impl Quantity {
    fn from_args(args: &Interp1dArgs) -> Self {
        if args.derivative {
            Self::Slope
        } else if args.second_derivative {
            Self::Curvature
        } else {
            Self::Value
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Value => "Spline Values",
            Self::Slope => "Spline Derivatives",
            Self::Curvature => "Spline Second Derivatives",
        }
    }
}

/// One evaluated query.
#[derive(Debug, Clone, Serialize)]
pub struct Interp1dRow {
    /// Query abscissa.
    pub x: f64,
    /// Value or derivative at `x`.
    pub value: f64,
}

impl Record for Interp1dRow {
    const HEADERS: &'static [&'static str] = &["x", "value"];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![fixed(self.x, precision), fixed(self.value, precision)]
    }

    fn minimal(&self) -> String {
        self.value.to_string()
    }
}

/// Execute the interp1d command.
pub fn execute(args: Interp1dArgs, ctx: &Context) -> Result<()> {
    let queries = parse_values("--at", &args.at)?;
    let (xs, ys) = load_series(&args.samples)?;
    let mut spline = Spline1D::new(xs, ys)
        .with_context(|| format!("fitting {}", args.samples.display()))?;

    let quantity = Quantity::from_args(&args);
    let rows = queries
        .iter()
        .map(|&x| {
            let value = match quantity {
                Quantity::Value => spline.evaluate(x),
                Quantity::Slope => spline.evaluate_derivative(x),
                Quantity::Curvature => spline.evaluate_second_derivative(x),
            }?;
            Ok(Interp1dRow { x, value })
        })
        .collect::<Result<Vec<_>, cfspline_math::SplineError>>()?;

    let acc = spline.accelerator();
    tracing::debug!(
        queries = rows.len(),
        hits = acc.hits(),
        misses = acc.misses(),
        "series evaluated"
    );

    ctx.header(quantity.title());
    print_output(&rows, ctx.format, ctx.precision())
}
