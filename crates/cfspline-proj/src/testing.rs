//! Equirectangular stand-in for the projection library in unit tests.

use crate::error::{ProjError, ProjResult};
use crate::project::{ProjectionLibrary, Projector};

pub(crate) const EARTH_RADIUS: f64 = 6_370_997.0;

pub(crate) fn params(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Plate carrée with false easting/northing; `lon_0` is honoured.
pub(crate) struct Equirectangular;

struct Plate {
    lon_0: f64,
    x_0: f64,
    y_0: f64,
}

impl ProjectionLibrary for Equirectangular {
    fn init(&self, params: &[String]) -> ProjResult<Box<dyn Projector>> {
        let mut plate = Plate {
            lon_0: 0.0,
            x_0: 0.0,
            y_0: 0.0,
        };
        for p in params {
            let (key, value) = p
                .split_once('=')
                .ok_or_else(|| ProjError::init(format!("malformed parameter {p}")))?;
            let number = || {
                value
                    .parse::<f64>()
                    .map_err(|_| ProjError::init(format!("bad number in {p}")))
            };
            match key {
                "lon_0" => plate.lon_0 = number()?.to_radians(),
                "x_0" => plate.x_0 = number()?,
                "y_0" => plate.y_0 = number()?,
                _ => {}
            }
        }
        Ok(Box::new(plate))
    }
}

impl Projector for Plate {
    fn forward(&self, (lon, lat): (f64, f64)) -> ProjResult<(f64, f64)> {
        if lat.abs() > std::f64::consts::FRAC_PI_2 {
            return Err(ProjError::Transform {
                index: 0,
                reason: "latitude beyond the pole".into(),
            });
        }
        Ok((
            EARTH_RADIUS * (lon - self.lon_0) + self.x_0,
            EARTH_RADIUS * lat + self.y_0,
        ))
    }

    fn inverse(&self, (x, y): (f64, f64)) -> ProjResult<(f64, f64)> {
        Ok((
            (x - self.x_0) / EARTH_RADIUS + self.lon_0,
            (y - self.y_0) / EARTH_RADIUS,
        ))
    }
}
