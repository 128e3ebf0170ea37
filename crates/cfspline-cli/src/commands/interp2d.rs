//! Interp2d command implementation.
//!
//! Fits a bicubic surface to a gridded field and samples it at points.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use cfspline_math::interpolation::BicubicSpline;

use crate::commands::Context;
use crate::input::{load_grid, parse_points};
use crate::output::{fixed, print_output, Record};

/// Arguments for the interp2d command.
#[derive(Args, Debug)]
pub struct Interp2dArgs {
    /// CSV file with `x,y,z` columns, one row per grid node
    #[arg(short, long)]
    pub grid: PathBuf,

    /// Query points (comma-separated `x:y` pairs, e.g. "0.5:1,2:2.5")
    #[arg(short, long, allow_hyphen_values = true)]
    pub at: String,
}

/// One sampled point of a surface.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceRow {
    /// Query x.
    pub x: f64,
    /// Query y.
    pub y: f64,
    /// Interpolated value.
    pub z: f64,
}

impl Record for SurfaceRow {
    const HEADERS: &'static [&'static str] = &["x", "y", "z"];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            fixed(self.x, precision),
            fixed(self.y, precision),
            fixed(self.z, precision),
        ]
    }

    fn minimal(&self) -> String {
        self.z.to_string()
    }
}

impl From<(f64, f64, f64)> for SurfaceRow {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

/// Loads and fits a grid file.
pub fn fit_grid(path: &std::path::Path) -> Result<BicubicSpline> {
    let grid = load_grid(path)?;
    let (nx, ny) = grid.dim();
    let surface =
        BicubicSpline::new(&grid).with_context(|| format!("fitting {}", path.display()))?;
    tracing::debug!(nx, ny, "surface fitted");
    Ok(surface)
}

/// Execute the interp2d command.
pub fn execute(args: Interp2dArgs, ctx: &Context) -> Result<()> {
    let points = parse_points("--at", &args.at)?;
    let surface = fit_grid(&args.grid)?;

    let values = surface.evaluate(&points)?;
    let rows: Vec<SurfaceRow> = points
        .iter()
        .zip(values)
        .map(|(&(x, y), z)| SurfaceRow { x, y, z })
        .collect();

    ctx.header("Surface Values");
    print_output(&rows, ctx.format, ctx.precision())
}
