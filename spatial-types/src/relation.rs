//! See documentation for the [`SpatialRelation`] enum.

use serde::{Deserialize, Serialize};

/// Classification of how two shapes relate spatially.
///
/// The relation is directed: it describes the *subject* shape (the one
/// `relate` was called on) with respect to the *query* shape (the argument).
/// Swap the point of view with [`SpatialRelation::transpose`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialRelation {
    /// The shapes have no points in common.
    Disjoint,
    /// The shapes overlap, but neither fully contains the other (or the
    /// subject cannot classify the overlap more precisely).
    Intersects,
    /// The query shape lies fully inside the subject shape.
    Contains,
    /// The subject shape lies fully inside the query shape.
    Within,
}

impl SpatialRelation {
    /// Swaps [`Contains`](Self::Contains) and [`Within`](Self::Within),
    /// leaving the symmetric relations unchanged.
    ///
    /// This is the relation seen from the query shape's point of view. It
    /// lets a shape answer `relate` by asking the other shape and flipping
    /// the result.
    pub fn transpose(self) -> Self {
        match self {
            Self::Contains => Self::Within,
            Self::Within => Self::Contains,
            other => other,
        }
    }

    /// Whether the shapes have at least one point in common.
    pub fn intersects(self) -> bool {
        !matches!(self, Self::Disjoint)
    }
}

impl std::fmt::Display for SpatialRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Disjoint => "DISJOINT",
            Self::Intersects => "INTERSECTS",
            Self::Contains => "CONTAINS",
            Self::Within => "WITHIN",
        };
        write!(f, "{name}")
    }
}
