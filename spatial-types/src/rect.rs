//! See documentation for the [`Rect`] shape.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::{Geom, Point, Shape, SpatialContext, SpatialRelation};

/// Sphere radius, in degrees, that makes geodetic areas come out in square
/// degrees.
const RADIUS_DEG: f64 = 180.0 / std::f64::consts::PI;

/// An axis-aligned rectangle.
///
/// Rectangles are created through [`SpatialContext::make_rectangle`], which
/// validates and normalizes the coordinates for the context's domain. A
/// geodetic rectangle with `x_min > x_max` crosses the antimeridian and
/// covers the longitudes `[x_min, 180] ∪ [-180, x_max]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    geodetic: bool,
}

impl Rect {
    pub(crate) fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64, geodetic: bool) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            geodetic,
        }
    }

    /// Western (left) edge.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Eastern (right) edge. Numerically less than [`Rect::x_min`] when the
    /// rectangle crosses the antimeridian.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Southern (bottom) edge.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Northern (top) edge.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Whether the rectangle lives in a geodetic (wrapping) domain.
    pub fn is_geodetic(&self) -> bool {
        self.geodetic
    }

    /// Whether the rectangle crosses the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.x_min > self.x_max
    }

    /// Horizontal extent, accounting for an antimeridian crossing.
    pub fn width(&self) -> f64 {
        let w = self.x_max - self.x_min;
        if w < 0.0 {
            w + 360.0
        } else {
            w
        }
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    fn relate_point(&self, point: &Point) -> SpatialRelation {
        if point.y() > self.y_max || point.y() < self.y_min {
            return SpatialRelation::Disjoint;
        }

        let x_min = self.x_min;
        let mut x_max = self.x_max;
        let mut px = point.x();
        if self.geodetic {
            // Unwrap an antimeridian crossing, then shift the point by a
            // whole turn so the intervals can overlap numerically.
            let raw_width = x_max - x_min;
            if raw_width < 0.0 {
                x_max = x_min + raw_width + 360.0;
            }
            if px < x_min {
                px += 360.0;
            } else if px > x_max {
                px -= 360.0;
            } else {
                return SpatialRelation::Contains;
            }
        }

        if x_min <= px && px <= x_max {
            SpatialRelation::Contains
        } else {
            SpatialRelation::Disjoint
        }
    }

    fn relate_x_range(&self, mut ext_min: f64, mut ext_max: f64) -> SpatialRelation {
        let mut x_min = self.x_min;
        let mut x_max = self.x_max;
        if self.geodetic {
            let raw_width = x_max - x_min;
            if raw_width == 360.0 {
                return SpatialRelation::Contains;
            }
            if raw_width < 0.0 {
                x_max = x_min + raw_width + 360.0;
            }
            let ext_raw_width = ext_max - ext_min;
            if ext_raw_width == 360.0 {
                return SpatialRelation::Within;
            }
            if ext_raw_width < 0.0 {
                ext_max = ext_min + ext_raw_width + 360.0;
            }
            // Shift one interval by a whole turn so they can overlap.
            if x_max < ext_min {
                x_min += 360.0;
                x_max += 360.0;
            } else if ext_max < x_min {
                ext_min += 360.0;
                ext_max += 360.0;
            }
        }
        relate_range(x_min, x_max, ext_min, ext_max)
    }

    fn relate_rect(&self, other: &Rect) -> SpatialRelation {
        let y_relation = relate_range(self.y_min, self.y_max, other.y_min, other.y_max);
        if y_relation == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }

        let x_relation = self.relate_x_range(other.x_min, other.x_max);
        if x_relation == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }

        if x_relation == y_relation {
            return x_relation;
        }

        // An axis with identical bounds defers the answer to the other axis.
        if self.x_min == other.x_min && self.x_max == other.x_max {
            return y_relation;
        }
        if self.y_min == other.y_min && self.y_max == other.y_max {
            return x_relation;
        }

        SpatialRelation::Intersects
    }
}

/// Classifies the interval `[ext_min, ext_max]` against `[int_min, int_max]`.
fn relate_range(int_min: f64, int_max: f64, ext_min: f64, ext_max: f64) -> SpatialRelation {
    if ext_min > int_max || ext_max < int_min {
        SpatialRelation::Disjoint
    } else if ext_min >= int_min && ext_max <= int_max {
        SpatialRelation::Contains
    } else if ext_min <= int_min && ext_max >= int_max {
        SpatialRelation::Within
    } else {
        SpatialRelation::Intersects
    }
}

impl Shape for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }

    fn relate(&self, other: &Geom) -> SpatialRelation {
        match other {
            Geom::Point(point) => self.relate_point(point),
            Geom::Rect(rect) => self.relate_rect(rect),
            Geom::Collection(collection) => {
                collection.relate(&Geom::Rect(*self)).transpose()
            }
        }
    }

    fn center(&self) -> Point {
        let mut x = self.x_min + self.width() / 2.0;
        if self.geodetic && x > 180.0 {
            x -= 360.0;
        }
        Point::new(x, self.y_min + self.height() / 2.0)
    }

    fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    fn area(&self, ctx: &SpatialContext) -> f64 {
        if ctx.is_geodetic() {
            // Area of the spherical zone between the two latitudes, cut to
            // the rectangle's longitude span. In square degrees.
            let lat_min = self.y_min.to_radians();
            let lat_max = self.y_max.to_radians();
            std::f64::consts::PI / 180.0
                * RADIUS_DEG
                * RADIUS_DEG
                * (lat_min.sin() - lat_max.sin()).abs()
                * self.width()
        } else {
            self.width() * self.height()
        }
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.geodetic == other.geodetic
            && self.x_min.abs_diff_eq(&other.x_min, epsilon)
            && self.y_min.abs_diff_eq(&other.y_min, epsilon)
            && self.x_max.abs_diff_eq(&other.x_max, epsilon)
            && self.y_max.abs_diff_eq(&other.y_max, epsilon)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(minX={},maxX={},minY={},maxY={})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        SpatialContext::cartesian()
            .make_rectangle(x_min, y_min, x_max, y_max)
            .unwrap()
    }

    fn geo_rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        SpatialContext::geodetic()
            .make_rectangle(x_min, y_min, x_max, y_max)
            .unwrap()
    }

    #[test]
    fn relate_point_inside_and_outside() {
        let r = rect(0.0, 0.0, 2.0, 2.0);
        assert_eq!(
            r.relate(&Geom::Point(Point::new(1.0, 1.0))),
            SpatialRelation::Contains
        );
        // The boundary belongs to the rectangle.
        assert_eq!(
            r.relate(&Geom::Point(Point::new(2.0, 2.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            r.relate(&Geom::Point(Point::new(3.0, 1.0))),
            SpatialRelation::Disjoint
        );
    }

    #[test]
    fn relate_rect_basic_cases() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            r.relate(&Geom::Rect(rect(2.0, 2.0, 3.0, 3.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            r.relate(&Geom::Rect(rect(-5.0, -5.0, 15.0, 15.0))),
            SpatialRelation::Within
        );
        assert_eq!(
            r.relate(&Geom::Rect(rect(5.0, 5.0, 15.0, 15.0))),
            SpatialRelation::Intersects
        );
        assert_eq!(
            r.relate(&Geom::Rect(rect(20.0, 20.0, 30.0, 30.0))),
            SpatialRelation::Disjoint
        );
        assert_eq!(
            r.relate(&Geom::Rect(r)),
            SpatialRelation::Contains
        );
    }

    #[test]
    fn relate_rect_equal_axis_defers_to_other() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        // Same x bounds, query taller than the subject.
        assert_eq!(
            r.relate(&Geom::Rect(rect(0.0, -5.0, 10.0, 15.0))),
            SpatialRelation::Within
        );
        // Same y bounds, query narrower than the subject.
        assert_eq!(
            r.relate(&Geom::Rect(rect(2.0, 0.0, 8.0, 10.0))),
            SpatialRelation::Contains
        );
    }

    #[test]
    fn crossing_rect_relates_across_antimeridian() {
        let crossing = geo_rect(170.0, -10.0, -170.0, 10.0);
        assert!(crossing.crosses_antimeridian());
        assert_eq!(crossing.width(), 20.0);

        assert_eq!(
            crossing.relate(&Geom::Point(Point::new(175.0, 0.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            crossing.relate(&Geom::Point(Point::new(-175.0, 0.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            crossing.relate(&Geom::Point(Point::new(0.0, 0.0))),
            SpatialRelation::Disjoint
        );

        assert_eq!(
            crossing.relate(&Geom::Rect(geo_rect(175.0, -5.0, -175.0, 5.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            crossing.relate(&Geom::Rect(geo_rect(160.0, -5.0, 175.0, 5.0))),
            SpatialRelation::Intersects
        );
    }

    #[test]
    fn touching_rects_across_antimeridian_intersect() {
        // [-180, -170] and [170, 180] touch at the antimeridian on a globe.
        let west = geo_rect(-180.0, 0.0, -170.0, 10.0);
        let east = geo_rect(170.0, 0.0, 180.0, 10.0);
        assert_eq!(
            west.relate(&Geom::Rect(east)),
            SpatialRelation::Intersects
        );
    }

    #[test]
    fn world_spanning_rect_contains_everything() {
        let world = geo_rect(-180.0, -90.0, 180.0, 90.0);
        assert_eq!(
            world.relate(&Geom::Rect(geo_rect(10.0, 10.0, 20.0, 20.0))),
            SpatialRelation::Contains
        );
        assert_eq!(
            geo_rect(10.0, 10.0, 20.0, 20.0).relate(&Geom::Rect(world)),
            SpatialRelation::Within
        );
    }

    #[test]
    fn center_wraps_for_crossing_rect() {
        let crossing = geo_rect(170.0, -10.0, -170.0, 10.0);
        assert_abs_diff_eq!(crossing.center(), Point::new(180.0, 0.0));

        let crossing = geo_rect(160.0, 0.0, -170.0, 10.0);
        assert_abs_diff_eq!(crossing.center(), Point::new(175.0, 5.0));
    }

    #[test]
    fn cartesian_area_is_width_times_height() {
        let ctx = SpatialContext::cartesian();
        assert_abs_diff_eq!(rect(0.0, 0.0, 4.0, 3.0).area(&ctx), 12.0);
        assert!(!rect(0.0, 0.0, 4.0, 0.0).has_area());
    }

    #[test]
    fn geodetic_area_of_full_sphere() {
        let ctx = SpatialContext::geodetic();
        let world = geo_rect(-180.0, -90.0, 180.0, 90.0);
        // Surface of a sphere with radius 180/pi, in square degrees.
        let expected = 129_600.0 / std::f64::consts::PI;
        assert_abs_diff_eq!(world.area(&ctx), expected, epsilon = 1e-9);
    }
}
