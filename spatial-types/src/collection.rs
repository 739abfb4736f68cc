//! See documentation for [`ShapeCollection`].

use std::fmt::Write as _;

use crate::{
    Geom, Point, Range, Rect, Shape, SpatialContext, SpatialRelation, SpatialTypesError,
};

/// A collection of shapes that behaves as one composite [`Shape`].
///
/// The collection keeps the member order it was given, but treats the
/// members as an unordered set for spatial queries: [`Shape::relate`]
/// returns the same answer for every permutation of members. Members may
/// overlap each other arbitrarily; because of that, `relate` may answer
/// [`SpatialRelation::Intersects`] where a true union of the members would
/// allow a more specific relation, and [`Shape::area`] is an upper bound
/// rather than the exact union area.
///
/// The bounding box is computed once at construction and the collection is
/// immutable afterwards, so it can be shared freely between threads (when
/// `S` allows it). Rebuild the collection to change membership.
#[derive(Debug, Clone)]
pub struct ShapeCollection<S: Shape = Geom> {
    shapes: Vec<S>,
    bbox: Rect,
}

impl<S: Shape> ShapeCollection<S> {
    /// Creates a collection of the given shapes.
    ///
    /// The vector is moved into the collection, which guarantees the members
    /// cannot change under the cached bounding box, and provides the stable
    /// O(1) positional access the query algorithms assume. Use
    /// [`ShapeCollection::from_slice`] to leave the caller's copy intact.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialTypesError::InvalidArgument`] if `shapes` is empty.
    ///
    /// ```
    /// use spatial_types::{Geom, Shape, ShapeCollection, SpatialContext};
    ///
    /// let ctx = SpatialContext::geodetic();
    /// let collection = ShapeCollection::new(
    ///     vec![
    ///         Geom::from(ctx.make_rectangle(170.0, -5.0, 175.0, 5.0).unwrap()),
    ///         Geom::from(ctx.make_rectangle(-175.0, -5.0, -170.0, 5.0).unwrap()),
    ///     ],
    ///     &ctx,
    /// )
    /// .unwrap();
    /// // The minimal enclosing box crosses the antimeridian.
    /// assert!(collection.bounding_box().crosses_antimeridian());
    /// ```
    pub fn new(shapes: Vec<S>, ctx: &SpatialContext) -> Result<Self, SpatialTypesError> {
        let bbox = Self::compute_bounding_box(&shapes, ctx)?;
        Ok(Self { shapes, bbox })
    }

    /// Creates a collection from a copy of the given shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialTypesError::InvalidArgument`] if `shapes` is empty.
    pub fn from_slice(shapes: &[S], ctx: &SpatialContext) -> Result<Self, SpatialTypesError>
    where
        S: Clone,
    {
        Self::new(shapes.to_vec(), ctx)
    }

    /// The minimal rectangle enclosing every member's bounding box, folded
    /// in one order-independent pass: a wraparound-aware [`Range`] on the
    /// horizontal axis, a running min/max on the vertical one.
    fn compute_bounding_box(shapes: &[S], ctx: &SpatialContext) -> Result<Rect, SpatialTypesError> {
        let (first, rest) = shapes.split_first().ok_or_else(|| {
            SpatialTypesError::InvalidArgument("must be given at least one shape".to_string())
        })?;

        let first_bbox = first.bounding_box();
        let mut x_range = Range::x_range(&first_bbox, ctx);
        let mut y_min = first_bbox.y_min();
        let mut y_max = first_bbox.y_max();

        for shape in rest {
            let member_bbox = shape.bounding_box();
            x_range = x_range.expand_to(Range::x_range(&member_bbox, ctx));
            y_min = y_min.min(member_bbox.y_min());
            y_max = y_max.max(member_bbox.y_max());
        }

        ctx.make_rectangle(x_range.min(), y_min, x_range.max(), y_max)
    }

    /// The member shapes, in the order given at construction.
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// The member at `index`, in construction order.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.shapes.get(index)
    }

    /// Number of member shapes, always at least one.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false: an empty collection cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<S: Shape> Shape for ShapeCollection<S> {
    fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// Classifies the relation of the whole collection to `other` without
    /// materializing a union of the members.
    ///
    /// The bounding box acts as a pre-filter: a disjoint or enclosing box
    /// settles the answer exactly, since every member is a subset of the
    /// box. Otherwise the member relations are folded one by one. The fold
    /// is a state machine whose result does not depend on member order:
    /// any `Intersects` poisons the whole fold, mixed containment
    /// directions (one member within the query, another disjoint from or
    /// containing it) collapse to `Intersects`, and `Contains` absorbs
    /// `Disjoint`.
    fn relate(&self, other: &Geom) -> SpatialRelation {
        let bbox_relation = self.bbox.relate(other);
        if matches!(
            bbox_relation,
            SpatialRelation::Disjoint | SpatialRelation::Within
        ) {
            return bbox_relation;
        }

        // A Contains cannot short-circuit the way Intersects does: members
        // may overlap, so a later member can still turn the answer into
        // Intersects.
        let mut accumulated: Option<SpatialRelation> = None;
        for shape in &self.shapes {
            let relation = shape.relate(other);
            accumulated = Some(match (accumulated, relation) {
                (_, SpatialRelation::Intersects)
                | (Some(SpatialRelation::Disjoint), SpatialRelation::Within)
                | (Some(SpatialRelation::Within), SpatialRelation::Disjoint)
                | (Some(SpatialRelation::Within), SpatialRelation::Contains)
                | (Some(SpatialRelation::Contains), SpatialRelation::Within) => {
                    return SpatialRelation::Intersects
                }
                (None, relation) => relation,
                (Some(SpatialRelation::Disjoint), SpatialRelation::Contains) => {
                    SpatialRelation::Contains
                }
                (Some(accumulated), _) => accumulated,
            });
        }

        // The member list is never empty, so the accumulator is always
        // seeded by the time the loop ends.
        accumulated.unwrap_or(bbox_relation)
    }

    fn center(&self) -> Point {
        self.bbox.center()
    }

    fn has_area(&self) -> bool {
        self.shapes.iter().any(|shape| shape.has_area())
    }

    /// An upper bound on the area of the union of the members: the sum of
    /// member areas, capped at the bounding box area. Overlapping members
    /// make the sum overestimate; the cap keeps the result physically
    /// possible and bounds the work for very large collections.
    fn area(&self, ctx: &SpatialContext) -> f64 {
        let max_area = self.bbox.area(ctx);
        let mut sum = 0.0;
        for shape in &self.shapes {
            sum += shape.area(ctx);
            if sum >= max_area {
                return max_area;
            }
        }
        sum
    }
}

impl<S: Shape + PartialEq> PartialEq for ShapeCollection<S> {
    fn eq(&self, other: &Self) -> bool {
        self.shapes == other.shapes
    }
}

impl<'a, S: Shape> IntoIterator for &'a ShapeCollection<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl<S: Shape + std::fmt::Display> std::fmt::Display for ShapeCollection<S> {
    /// Diagnostic rendering, truncated once it grows too long.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::with_capacity(100);
        buf.push_str("ShapeCollection(");
        for (i, shape) in self.shapes.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            write!(buf, "{shape}")?;
            if buf.len() > 150 {
                buf.push_str(" ... ");
                break;
            }
        }
        buf.push(')');
        f.write_str(&buf)
    }
}
