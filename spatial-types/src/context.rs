//! See documentation for [`SpatialContext`].

use serde::{Deserialize, Serialize};

use crate::{Point, Rect, SpatialTypesError};

/// Description of the coordinate domain shapes live in.
///
/// The context decides how coordinates are validated and how ranges along
/// the horizontal axis combine: on a geodetic domain the axis is the
/// longitude circle and wraps at the antimeridian, on a cartesian domain it
/// is an unbounded line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialContext {
    geodetic: bool,
}

impl SpatialContext {
    /// A domain of degrees on a sphere: longitudes in [-180, 180] wrapping
    /// at the antimeridian, latitudes in [-90, 90].
    pub fn geodetic() -> Self {
        Self { geodetic: true }
    }

    /// An unbounded Euclidean plane.
    pub fn cartesian() -> Self {
        Self { geodetic: false }
    }

    /// Whether the horizontal axis of this domain wraps around.
    pub fn is_geodetic(&self) -> bool {
        self.geodetic
    }

    /// The bounds of the domain, if it has any.
    pub fn world_bounds(&self) -> Option<Rect> {
        self.geodetic
            .then(|| Rect::new(-180.0, -90.0, 180.0, 90.0, true))
    }

    /// Creates a rectangle with the given edges, validated for this domain.
    ///
    /// On a geodetic domain longitudes are normalized into [-180, 180], a
    /// horizontal span of 360 degrees or more collapses to the full circle,
    /// and `x_min > x_max` denotes a rectangle crossing the antimeridian.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialTypesError::InvalidArgument`] if `y_min > y_max`, if
    /// a geodetic latitude lies outside [-90, 90], or if `x_min > x_max` on
    /// a cartesian domain.
    ///
    /// ```
    /// use spatial_types::SpatialContext;
    ///
    /// let rect = SpatialContext::geodetic()
    ///     .make_rectangle(170.0, -10.0, -170.0, 10.0)
    ///     .unwrap();
    /// assert!(rect.crosses_antimeridian());
    /// assert_eq!(rect.width(), 20.0);
    /// ```
    pub fn make_rectangle(
        &self,
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<Rect, SpatialTypesError> {
        if y_min > y_max {
            return Err(SpatialTypesError::InvalidArgument(format!(
                "y_min {y_min} must not exceed y_max {y_max}"
            )));
        }

        if !self.geodetic {
            if x_min > x_max {
                return Err(SpatialTypesError::InvalidArgument(format!(
                    "x_min {x_min} must not exceed x_max {x_max} on a cartesian domain"
                )));
            }
            return Ok(Rect::new(x_min, y_min, x_max, y_max, false));
        }

        check_latitude(y_min)?;
        check_latitude(y_max)?;

        if x_max - x_min >= 360.0 {
            return Ok(Rect::new(-180.0, y_min, 180.0, y_max, true));
        }
        Ok(Rect::new(
            norm_longitude(x_min),
            y_min,
            norm_longitude(x_max),
            y_max,
            true,
        ))
    }

    /// Creates a point with the given coordinates, validated for this
    /// domain. On a geodetic domain the longitude is normalized into
    /// [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`SpatialTypesError::InvalidArgument`] if a geodetic latitude
    /// lies outside [-90, 90].
    pub fn make_point(&self, x: f64, y: f64) -> Result<Point, SpatialTypesError> {
        if !self.geodetic {
            return Ok(Point::new(x, y));
        }
        check_latitude(y)?;
        Ok(Point::new(norm_longitude(x), y))
    }
}

fn check_latitude(lat: f64) -> Result<(), SpatialTypesError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(SpatialTypesError::InvalidArgument(format!(
            "latitude {lat} is outside [-90, 90]"
        )))
    }
}

/// Brings a longitude into [-180, 180]. Values already in range, including
/// both halves of the antimeridian, are kept as given.
fn norm_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_rejects_inverted_ranges() {
        let ctx = SpatialContext::cartesian();
        assert!(ctx.make_rectangle(5.0, 0.0, 1.0, 1.0).is_err());
        assert!(ctx.make_rectangle(0.0, 5.0, 1.0, 1.0).is_err());
        assert!(ctx.make_rectangle(0.0, 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn geodetic_validates_latitude() {
        let ctx = SpatialContext::geodetic();
        assert!(ctx.make_rectangle(0.0, -91.0, 10.0, 10.0).is_err());
        assert!(ctx.make_point(0.0, 95.0).is_err());
        assert!(ctx.make_point(0.0, 90.0).is_ok());
    }

    #[test]
    fn geodetic_normalizes_longitude() {
        let ctx = SpatialContext::geodetic();
        let p = ctx.make_point(190.0, 0.0).unwrap();
        assert_eq!(p.x(), -170.0);

        // Both halves of the antimeridian stay as given.
        assert_eq!(ctx.make_point(180.0, 0.0).unwrap().x(), 180.0);
        assert_eq!(ctx.make_point(-180.0, 0.0).unwrap().x(), -180.0);
    }

    #[test]
    fn geodetic_collapses_world_spanning_rects() {
        let ctx = SpatialContext::geodetic();
        let rect = ctx.make_rectangle(-500.0, 0.0, 500.0, 10.0).unwrap();
        assert_eq!((rect.x_min(), rect.x_max()), (-180.0, 180.0));
        assert_eq!(rect.width(), 360.0);
    }

    #[test]
    fn geodetic_allows_crossing_rects() {
        let ctx = SpatialContext::geodetic();
        let rect = ctx.make_rectangle(170.0, 0.0, -170.0, 10.0).unwrap();
        assert!(rect.crosses_antimeridian());
    }

    #[test]
    fn world_bounds_only_for_geodetic() {
        assert!(SpatialContext::cartesian().world_bounds().is_none());
        let world = SpatialContext::geodetic().world_bounds().unwrap();
        assert_eq!(world.width(), 360.0);
        assert_eq!(world.height(), 180.0);
    }
}
