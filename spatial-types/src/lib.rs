//! Trait based spatial shapes and relation classification algorithms.
//!
//! The centerpiece of this crate is [`ShapeCollection`]: an aggregate of
//! heterogeneous shapes that itself behaves as a single [`Shape`]. A
//! collection classifies its relation to an arbitrary query shape
//! ([`SpatialRelation`]) without ever computing a geometric union of its
//! members, using its cached bounding box as a cheap pre-filter and a
//! one-pass order-independent fold over member relations.
//!
//! Shapes live in a coordinate domain described by a [`SpatialContext`]:
//! either a flat Euclidean plane, or geodetic degrees where the horizontal
//! axis wraps at the antimeridian.
//!
//! ```
//! use spatial_types::{Geom, Point, Shape, ShapeCollection, SpatialContext, SpatialRelation};
//!
//! let ctx = SpatialContext::cartesian();
//! let collection = ShapeCollection::new(
//!     vec![
//!         Geom::from(ctx.make_rectangle(0.0, 0.0, 2.0, 2.0).unwrap()),
//!         Geom::from(ctx.make_rectangle(5.0, 5.0, 7.0, 7.0).unwrap()),
//!     ],
//!     &ctx,
//! )
//! .unwrap();
//!
//! let query = Geom::from(Point::new(1.0, 1.0));
//! assert_eq!(collection.relate(&query), SpatialRelation::Contains);
//! ```

mod collection;
pub use collection::*;

mod context;
pub use context::*;

mod error;
pub use error::*;

mod geom;
pub use geom::*;

mod point;
pub use point::*;

mod range;
pub use range::*;

mod rect;
pub use rect::*;

mod relation;
pub use relation::*;

mod shape;
pub use shape::*;
