//! CF grid mappings and their proj4 parameter lists.
//!
//! A CF-conventions file describes its projected grid with a grid-mapping
//! variable whose attributes name the projection and its parameters.
//! [`CfGridMapping`] holds those attributes as read; [`GridMapping`] is the
//! validated form that renders the `key=value` list a projection library is
//! initialised with.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{ProjError, ProjResult};
use crate::project::{project, ProjectionLibrary};

/// Attributes of a CF grid-mapping variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CfGridMapping {
    /// CF name of the projection, e.g. `lambert_azimuthal_equal_area`.
    pub grid_mapping_name: String,
    /// Central meridian in degrees.
    pub longitude_of_central_meridian: Option<f64>,
    /// Latitude of the projection origin in degrees.
    pub latitude_of_projection_origin: Option<f64>,
    /// Polar stereographic only: the meridian pointing straight down.
    pub straight_vertical_longitude_from_pole: Option<f64>,
    /// One or two standard parallels for the conic projections.
    pub standard_parallel: Vec<f64>,
    /// Stereographic scale factor.
    pub scale_factor_at_projection_origin: Option<f64>,
    /// False easting in projected units.
    pub false_easting: f64,
    /// False northing in projected units.
    #[serde(alias = "false_westing")]
    pub false_northing: f64,
}

/// The projections a grid may use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Polar or oblique stereographic (`stere`).
    Stereographic {
        /// Central meridian, degrees.
        lon_0: f64,
        /// Origin latitude, degrees.
        lat_0: f64,
        /// Scale factor at the origin.
        k_0: f64,
    },
    /// Lambert azimuthal equal area (`laea`).
    LambertAzimuthalEqualArea {
        /// Central meridian, degrees.
        lon_0: f64,
        /// Origin latitude, degrees.
        lat_0: f64,
    },
    /// Albers equal-area conic (`aea`).
    AlbersEqualArea {
        /// Central meridian, degrees.
        lon_0: f64,
        /// Origin latitude, degrees.
        lat_0: f64,
        /// First standard parallel.
        lat_1: f64,
        /// Optional second standard parallel.
        lat_2: Option<f64>,
    },
    /// Lambert conformal conic (`lcc`).
    LambertConformalConic {
        /// Central meridian, degrees.
        lon_0: f64,
        /// Origin latitude, degrees.
        lat_0: f64,
        /// First standard parallel.
        lat_1: f64,
        /// Optional second standard parallel.
        lat_2: Option<f64>,
    },
}

impl ProjectionKind {
    /// The proj4 `proj=` name.
    pub fn proj_name(&self) -> &'static str {
        match self {
            Self::Stereographic { .. } => "stere",
            Self::LambertAzimuthalEqualArea { .. } => "laea",
            Self::AlbersEqualArea { .. } => "aea",
            Self::LambertConformalConic { .. } => "lcc",
        }
    }
}

/// A validated grid mapping: projection plus false origin offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMapping {
    /// The projection and its parameters.
    pub kind: ProjectionKind,
    /// False easting (`x_0`).
    pub x_0: f64,
    /// False northing (`y_0`).
    pub y_0: f64,
}

impl GridMapping {
    /// Validates CF attributes into a grid mapping.
    ///
    /// # Errors
    ///
    /// - [`ProjError::UnknownMapping`] for an unsupported `grid_mapping_name`
    /// - [`ProjError::InvalidMapping`] if a required attribute is missing or
    ///   the number of standard parallels is not one or two
    pub fn from_cf(cf: &CfGridMapping) -> ProjResult<Self> {
        let kind = match cf.grid_mapping_name.as_str() {
            "polar_stereographic" => ProjectionKind::Stereographic {
                lon_0: required(
                    cf.straight_vertical_longitude_from_pole,
                    "straight_vertical_longitude_from_pole",
                )?,
                lat_0: 90.0,
                k_0: cf.scale_factor_at_projection_origin.unwrap_or(1.0),
            },
            "stereographic" => ProjectionKind::Stereographic {
                lon_0: central_meridian(cf)?,
                lat_0: origin_latitude(cf)?,
                k_0: cf.scale_factor_at_projection_origin.unwrap_or(1.0),
            },
            "lambert_azimuthal_equal_area" => ProjectionKind::LambertAzimuthalEqualArea {
                lon_0: central_meridian(cf)?,
                lat_0: origin_latitude(cf)?,
            },
            "albers_conical_equal_area" => {
                let (lat_1, lat_2) = standard_parallels(cf)?;
                ProjectionKind::AlbersEqualArea {
                    lon_0: central_meridian(cf)?,
                    lat_0: origin_latitude(cf)?,
                    lat_1,
                    lat_2,
                }
            }
            "lambert_conformal_conic" => {
                let (lat_1, lat_2) = standard_parallels(cf)?;
                ProjectionKind::LambertConformalConic {
                    lon_0: central_meridian(cf)?,
                    lat_0: origin_latitude(cf)?,
                    lat_1,
                    lat_2,
                }
            }
            other => return Err(ProjError::UnknownMapping(other.to_string())),
        };

        Ok(Self {
            kind,
            x_0: cf.false_easting,
            y_0: cf.false_northing,
        })
    }

    /// Renders the proj4 `key=value` parameter list.
    pub fn proj4_params(&self) -> Vec<String> {
        let mut params = vec![format!("proj={}", self.kind.proj_name())];
        match &self.kind {
            ProjectionKind::Stereographic { lon_0, lat_0, k_0 } => {
                params.push(format!("lon_0={lon_0}"));
                params.push(format!("lat_0={lat_0}"));
                params.push(format!("k_0={k_0}"));
            }
            ProjectionKind::LambertAzimuthalEqualArea { lon_0, lat_0 } => {
                params.push(format!("lon_0={lon_0}"));
                params.push(format!("lat_0={lat_0}"));
            }
            ProjectionKind::AlbersEqualArea {
                lon_0,
                lat_0,
                lat_1,
                lat_2,
            }
            | ProjectionKind::LambertConformalConic {
                lon_0,
                lat_0,
                lat_1,
                lat_2,
            } => {
                params.push(format!("lon_0={lon_0}"));
                params.push(format!("lat_0={lat_0}"));
                params.push(format!("lat_1={lat_1}"));
                if let Some(lat_2) = lat_2 {
                    params.push(format!("lat_2={lat_2}"));
                }
            }
        }
        params.push(format!("x_0={}", self.x_0));
        params.push(format!("y_0={}", self.y_0));
        params
    }

    /// Shifts the false origin so that `(lon0, lat0)` projects to `(0, 0)`.
    ///
    /// The origin is projected with the current offsets and the offsets are
    /// replaced by the negated result.
    pub fn set_origin(
        &mut self,
        lib: &dyn ProjectionLibrary,
        lon0: f64,
        lat0: f64,
    ) -> ProjResult<()> {
        let projector = lib.init(&self.proj4_params())?;
        let (x, y) = projector.forward((lon0.to_radians(), lat0.to_radians()))?;
        log::debug!("moving {} origin to ({lon0}, {lat0}): offsets ({}, {})", self.kind.proj_name(), -x, -y);
        self.x_0 = -x;
        self.y_0 = -y;
        Ok(())
    }

    /// Projects a `2×n` array of points with this mapping's parameters.
    pub fn project(
        &self,
        lib: &dyn ProjectionLibrary,
        points: ArrayView2<'_, f32>,
        inverse: bool,
    ) -> ProjResult<Array2<f32>> {
        project(lib, &self.proj4_params(), points, inverse)
    }
}

fn required(value: Option<f64>, name: &str) -> ProjResult<f64> {
    value.ok_or_else(|| ProjError::invalid_mapping(format!("missing attribute {name}")))
}

fn central_meridian(cf: &CfGridMapping) -> ProjResult<f64> {
    required(cf.longitude_of_central_meridian, "longitude_of_central_meridian")
}

fn origin_latitude(cf: &CfGridMapping) -> ProjResult<f64> {
    required(cf.latitude_of_projection_origin, "latitude_of_projection_origin")
}

fn standard_parallels(cf: &CfGridMapping) -> ProjResult<(f64, Option<f64>)> {
    match cf.standard_parallel.as_slice() {
        [lat_1] => Ok((*lat_1, None)),
        [lat_1, lat_2] => Ok((*lat_1, Some(*lat_2))),
        other => Err(ProjError::invalid_mapping(format!(
            "standard_parallel must have 1 or 2 values, got {}",
            other.len()
        ))),
    }
}
