//! One-dimensional coordinate ranges used when aggregating bounding boxes.

use serde::{Deserialize, Serialize};

use crate::{Rect, SpatialContext};

/// A closed interval along the horizontal coordinate axis.
///
/// A [`Range::Longitude`] interval lives on a circle of 360 degrees, so the
/// minimal interval enclosing two ranges may cross the antimeridian. A
/// crossing range is encoded with `min > max` and covers
/// `[min, 180] ∪ [-180, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Range {
    /// Interval on a linear (Euclidean) axis.
    Cartesian {
        /// Lower bound.
        min: f64,
        /// Upper bound, not less than `min`.
        max: f64,
    },
    /// Interval on the longitude circle, in degrees within [-180, 180].
    Longitude {
        /// Western bound.
        min: f64,
        /// Eastern bound. Less than `min` when the range crosses the
        /// antimeridian.
        max: f64,
    },
}

/// The full longitude circle.
const WORLD_LON: Range = Range::Longitude {
    min: -180.0,
    max: 180.0,
};

impl Range {
    /// The horizontal range of a rectangle's bounding interval, wraparound
    /// aware when the context is geodetic.
    pub fn x_range(rect: &Rect, ctx: &SpatialContext) -> Self {
        if ctx.is_geodetic() {
            Self::Longitude {
                min: rect.x_min(),
                max: rect.x_max(),
            }
        } else {
            Self::Cartesian {
                min: rect.x_min(),
                max: rect.x_max(),
            }
        }
    }

    /// Lower bound as stored. For a crossing longitude range this is the
    /// western edge, numerically greater than [`Range::max`].
    pub fn min(&self) -> f64 {
        match *self {
            Self::Cartesian { min, .. } | Self::Longitude { min, .. } => min,
        }
    }

    /// Upper bound as stored.
    pub fn max(&self) -> f64 {
        match *self {
            Self::Cartesian { max, .. } | Self::Longitude { max, .. } => max,
        }
    }

    /// Whether the range crosses the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        match *self {
            Self::Cartesian { .. } => false,
            Self::Longitude { min, max } => min > max,
        }
    }

    /// Extent of the range, accounting for wraparound.
    pub fn width(&self) -> f64 {
        let w = self.max() - self.min();
        if w < 0.0 {
            w + 360.0
        } else {
            w
        }
    }

    /// Midpoint of the range, normalized into (-180, 180] for longitudes.
    pub fn center(&self) -> f64 {
        let center = self.min() + self.width() / 2.0;
        match self {
            Self::Cartesian { .. } => center,
            Self::Longitude { .. } => {
                if center > 180.0 {
                    center - 360.0
                } else {
                    center
                }
            }
        }
    }

    /// Whether `v` lies inside the range, accounting for wraparound.
    pub fn contains(&self, v: f64) -> bool {
        if self.crosses_antimeridian() {
            v >= self.min() || v <= self.max()
        } else {
            v >= self.min() && v <= self.max()
        }
    }

    /// The smallest range enclosing both `self` and `other`.
    ///
    /// The combination is commutative and associative over the covered
    /// points, so folding any permutation of ranges yields the same cover.
    /// Two longitude ranges that jointly wrap the circle collapse to the
    /// full world.
    pub fn expand_to(self, other: Self) -> Self {
        match (self, other) {
            (
                Self::Cartesian {
                    min: a_min,
                    max: a_max,
                },
                Self::Cartesian {
                    min: b_min,
                    max: b_max,
                },
            ) => Self::Cartesian {
                min: a_min.min(b_min),
                max: a_max.max(b_max),
            },
            _ => self.expand_longitude(other),
        }
    }

    fn expand_longitude(self, other: Self) -> Self {
        // Value-identical ranges contain each other's endpoints, which the
        // mutual-containment arm below would mistake for two ranges covering
        // the circle between them.
        if self.min() == other.min() && self.max() == other.max() {
            return Self::Longitude {
                min: self.min(),
                max: self.max(),
            };
        }

        // Order the two ranges so that `a` is the (circularly) western one;
        // this makes the merge independent of argument order.
        let (a, b) = if circular_diff(self.center(), other.center()) <= 0.0 {
            (self, other)
        } else {
            (other, self)
        };

        match (b.contains(a.min()), a.contains(b.max())) {
            // The ranges cover the circle between them.
            (true, true) => WORLD_LON,
            // `a` lies entirely inside `b`.
            (true, false) => b,
            // `b` lies entirely inside `a`.
            (false, true) => a,
            (false, false) => Self::Longitude {
                min: a.min(),
                max: b.max(),
            },
        }
    }
}

/// Signed circular difference `a - b`, normalized into [-180, 180].
fn circular_diff(a: f64, b: f64) -> f64 {
    let mut d = a - b;
    if d > 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    d
}
