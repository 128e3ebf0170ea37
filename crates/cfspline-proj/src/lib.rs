//! # cfspline-proj
//!
//! Map projection of point arrays for CF-conventions grids.
//!
//! This crate provides:
//!
//! - **Batch projection**: [`project`] pushes a `2×n` array of points through
//!   a cartographic library, forward (degrees in) or inverse (degrees out)
//! - **Library seam**: [`ProjectionLibrary`] and [`Projector`] wrap whatever
//!   library actually performs the transform
//! - **Grid mappings**: [`GridMapping`] turns CF grid-mapping attributes into
//!   proj4 parameter lists and can move the false origin
//!
//! ## Example
//!
//! ```rust
//! use cfspline_proj::{CfGridMapping, GridMapping};
//!
//! let cf = CfGridMapping {
//!     grid_mapping_name: "polar_stereographic".into(),
//!     straight_vertical_longitude_from_pole: Some(-45.0),
//!     ..CfGridMapping::default()
//! };
//! let mapping = GridMapping::from_cf(&cf).unwrap();
//! assert_eq!(mapping.proj4_params()[0], "proj=stere");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mapping;
pub mod project;

#[cfg(test)]
mod testing;

pub use error::{ProjError, ProjResult};
pub use mapping::{CfGridMapping, GridMapping, ProjectionKind};
pub use project::{project, ProjectionLibrary, Projector};
