//! See documentation for the [`Shape`] trait.

use crate::{Geom, Point, Rect, SpatialContext, SpatialRelation};

/// A geometric region of a 2-dimensional coordinate domain.
///
/// The trait is the capability the rest of the crate consumes and exposes:
/// every concrete shape implements it, and so does
/// [`ShapeCollection`](crate::ShapeCollection), which lets collections nest
/// inside other collections or stand anywhere a single shape is expected.
///
/// Implementations must be pure: none of the methods may mutate the shape,
/// and repeated calls with equal arguments must return equal results.
pub trait Shape {
    /// The smallest axis-aligned rectangle enclosing the shape.
    fn bounding_box(&self) -> Rect;

    /// Classifies this shape's spatial relation to `other`.
    ///
    /// The result is directed: [`SpatialRelation::Contains`] means `other`
    /// lies fully inside this shape. An implementation may answer
    /// [`SpatialRelation::Intersects`] when the overlap cannot be classified
    /// more precisely.
    fn relate(&self, other: &Geom) -> SpatialRelation;

    /// The center of the shape. For composite shapes this is the center of
    /// the bounding box, not a centroid.
    fn center(&self) -> Point;

    /// Whether the shape covers a non-zero area.
    fn has_area(&self) -> bool;

    /// The area covered by the shape, in the units of `ctx` (square degrees
    /// for a geodetic context).
    fn area(&self, ctx: &SpatialContext) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn relate(&self, other: &Geom) -> SpatialRelation {
        (**self).relate(other)
    }

    fn center(&self) -> Point {
        (**self).center()
    }

    fn has_area(&self) -> bool {
        (**self).has_area()
    }

    fn area(&self, ctx: &SpatialContext) -> f64 {
        (**self).area(ctx)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn relate(&self, other: &Geom) -> SpatialRelation {
        (**self).relate(other)
    }

    fn center(&self) -> Point {
        (**self).center()
    }

    fn has_area(&self) -> bool {
        (**self).has_area()
    }

    fn area(&self, ctx: &SpatialContext) -> f64 {
        (**self).area(ctx)
    }
}
