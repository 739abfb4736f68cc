//! See documentation for the [`Geom`] enum.

use crate::{Point, Rect, Shape, ShapeCollection, SpatialContext, SpatialRelation};

/// A concrete shape of any of the geometry types provided by this crate.
///
/// `Geom` is the query-shape type of [`Shape::relate`], and the default
/// member type of [`ShapeCollection`]. Because a collection of `Geom` values
/// is itself a `Geom` variant, collections can nest to arbitrary depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom {
    /// A single point.
    Point(Point),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A collection of shapes treated as one composite shape.
    Collection(ShapeCollection<Geom>),
}

impl Shape for Geom {
    fn bounding_box(&self) -> Rect {
        match self {
            Geom::Point(v) => v.bounding_box(),
            Geom::Rect(v) => v.bounding_box(),
            Geom::Collection(v) => v.bounding_box(),
        }
    }

    fn relate(&self, other: &Geom) -> SpatialRelation {
        match self {
            Geom::Point(v) => v.relate(other),
            Geom::Rect(v) => v.relate(other),
            Geom::Collection(v) => v.relate(other),
        }
    }

    fn center(&self) -> Point {
        match self {
            Geom::Point(v) => v.center(),
            Geom::Rect(v) => v.center(),
            Geom::Collection(v) => v.center(),
        }
    }

    fn has_area(&self) -> bool {
        match self {
            Geom::Point(v) => v.has_area(),
            Geom::Rect(v) => v.has_area(),
            Geom::Collection(v) => v.has_area(),
        }
    }

    fn area(&self, ctx: &SpatialContext) -> f64 {
        match self {
            Geom::Point(v) => v.area(ctx),
            Geom::Rect(v) => v.area(ctx),
            Geom::Collection(v) => v.area(ctx),
        }
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Geom::Point(value)
    }
}

impl From<Rect> for Geom {
    fn from(value: Rect) -> Self {
        Geom::Rect(value)
    }
}

impl From<ShapeCollection<Geom>> for Geom {
    fn from(value: ShapeCollection<Geom>) -> Self {
        Geom::Collection(value)
    }
}

impl std::fmt::Display for Geom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geom::Point(v) => std::fmt::Display::fmt(v, f),
            Geom::Rect(v) => std::fmt::Display::fmt(v, f),
            Geom::Collection(v) => std::fmt::Display::fmt(v, f),
        }
    }
}
