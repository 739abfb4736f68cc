//! See documentation for the [`Point`] shape.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::{Geom, Rect, Shape, SpatialContext, SpatialRelation};

/// A point in a 2-dimensional coordinate domain.
///
/// In a geodetic context `x` is the longitude and `y` the latitude, both in
/// degrees. Use [`SpatialContext::make_point`] to validate and normalize
/// coordinates for a specific domain.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate (longitude in a geodetic domain).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate (latitude in a geodetic domain).
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Shape for Point {
    /// The degenerate rectangle covering exactly this point. With zero
    /// extent on both axes the box cannot cross the antimeridian, so it is
    /// the same in either coordinate domain; wraparound handling stays with
    /// the shape the point is related to.
    fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.x, self.y, false)
    }

    fn relate(&self, other: &Geom) -> SpatialRelation {
        match other {
            Geom::Point(point) => {
                if self == point {
                    SpatialRelation::Intersects
                } else {
                    SpatialRelation::Disjoint
                }
            }
            // A point cannot contain anything else, so ask the other shape
            // and flip the point of view.
            other => other.relate(&Geom::Point(*self)).transpose(),
        }
    }

    fn center(&self) -> Point {
        *self
    }

    fn has_area(&self) -> bool {
        false
    }

    fn area(&self, _ctx: &SpatialContext) -> f64 {
        0.0
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pt(x={},y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_points_intersect() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.relate(&Geom::Point(p)), SpatialRelation::Intersects);
        assert_eq!(
            p.relate(&Geom::Point(Point::new(1.0, 3.0))),
            SpatialRelation::Disjoint
        );
    }

    #[test]
    fn point_is_within_an_enclosing_rect() {
        let ctx = SpatialContext::cartesian();
        let rect = ctx.make_rectangle(0.0, 0.0, 2.0, 2.0).unwrap();
        assert_eq!(
            Point::new(1.0, 1.0).relate(&Geom::Rect(rect)),
            SpatialRelation::Within
        );
        assert_eq!(
            Point::new(5.0, 5.0).relate(&Geom::Rect(rect)),
            SpatialRelation::Disjoint
        );
    }

    #[test]
    fn bounding_box_is_degenerate_in_any_domain() {
        let geo = SpatialContext::geodetic();
        let p = geo.make_point(180.0, 0.0).unwrap();

        let bbox = p.bounding_box();
        assert_eq!(bbox.width(), 0.0);
        assert!(!bbox.crosses_antimeridian());

        // Wraparound classification near the antimeridian is the relating
        // shape's job, not the point box's.
        let crossing = geo.make_rectangle(170.0, -10.0, -170.0, 10.0).unwrap();
        assert_eq!(
            p.relate(&Geom::Rect(crossing)),
            SpatialRelation::Within
        );
    }

    #[test]
    fn point_has_no_area() {
        let p = Point::new(1.0, 1.0);
        assert!(!p.has_area());
        assert_eq!(p.area(&SpatialContext::cartesian()), 0.0);
        assert_eq!(p.bounding_box().width(), 0.0);
        assert_eq!(p.center(), p);
    }
}
