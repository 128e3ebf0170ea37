//! Profile command implementation.
//!
//! Resamples a polyline at a fixed spacing and samples a gridded field along it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::commands::interp2d::{fit_grid, SurfaceRow};
use crate::commands::Context;
use crate::input::parse_points;
use crate::output::print_output;

/// Arguments for the profile command.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// CSV file with `x,y,z` columns, one row per grid node
    #[arg(short, long)]
    pub grid: PathBuf,

    /// Polyline vertices (comma-separated `x:y` pairs)
    #[arg(short, long, allow_hyphen_values = true)]
    pub vertices: String,

    /// Spacing between samples along the path (defaults to the configured interval)
    #[arg(short, long)]
    pub interval: Option<f64>,
}

/// Execute the profile command.
pub fn execute(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let vertices = parse_points("--vertices", &args.vertices)?;
    let interval = args.interval.unwrap_or(ctx.config.profile_interval);
    let surface = fit_grid(&args.grid)?;

    let rows: Vec<SurfaceRow> = surface
        .sample_profile(&vertices, interval)?
        .into_iter()
        .map(SurfaceRow::from)
        .collect();
    tracing::info!(interval, samples = rows.len(), "profile extracted");

    ctx.header("Profile");
    print_output(&rows, ctx.format, ctx.precision())
}
