//! Axis-aligned boxes and the handful of operations the quadtree needs on them.
//!
//! Coordinates follow screen conventions: `y` grows downward, so the
//! "north" half of a box is the half with the smaller `y` values.

use glam::DVec2;

/// A 2D point with `f64` coordinates.
pub type Point = DVec2;

/// Axis-aligned bounding box: `min` is the top-left corner, `max` the bottom-right.
///
/// A box whose `min` exceeds its `max` on any axis (or that contains NaN) is
/// never stored as such: [`Aabb::new`] and [`Aabb::from_coords`] turn it into
/// [`Aabb::EMPTY`], which overlaps nothing and is the identity of [`Aabb::union`].
/// A malformed box built from a struct literal behaves the same way in
/// [`Aabb::overlaps`], [`Aabb::union`] and [`hull`].
///
/// # Example
/// ```
/// use loose_quadtree::Aabb;
///
/// let a = Aabb::from_coords(0.0, 0.0, 2.0, 2.0);
/// let b = Aabb::from_coords(1.0, 1.0, 3.0, 3.0);
/// assert!(a.overlaps(&b));
/// assert_eq!(a.union(&b), Aabb::from_coords(0.0, 0.0, 3.0, 3.0));
/// assert!(Aabb::from_coords(5.0, 0.0, 1.0, 1.0).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point,
    /// Maximum corner
    pub max: Point,
}

impl Aabb {
    /// The empty box: `min = +inf`, `max = -inf` on both axes.
    pub const EMPTY: Self = Self {
        min: DVec2::INFINITY,
        max: DVec2::NEG_INFINITY,
    };

    /// Creates a box from its corners. Malformed corners yield [`Aabb::EMPTY`].
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }.normalized()
    }

    /// Creates a box from `(min_x, min_y, max_x, max_y)`.
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(DVec2::new(min_x, min_y), DVec2::new(max_x, max_y))
    }

    /// Creates a degenerate box covering a single point.
    pub fn from_point(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Returns `true` for the empty box or any box with `min > max` (or NaN) on an axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    /// Maps any malformed box to [`Aabb::EMPTY`] and leaves valid boxes unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_empty() { Self::EMPTY } else { self }
    }

    /// Midpoint of the box. NaN for the empty box.
    ///
    /// Halves before adding, so boxes reaching towards `f64::MAX` keep a
    /// finite center.
    #[inline]
    pub fn center(&self) -> Point {
        self.min * 0.5 + self.max * 0.5
    }

    /// Extent along `x`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along `y`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Smallest box containing both `self` and `other`. Empty or malformed
    /// operands contribute nothing.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.normalized();
        }
        if self.is_empty() {
            return *other;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the box to include `point`.
    #[inline]
    #[must_use]
    pub fn include_point(&self, point: Point) -> Self {
        let this = self.normalized();
        Self {
            min: this.min.min(point),
            max: this.max.max(point),
        }
    }

    /// Closed containment test: points on the border are inside.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Half-open overlap test.
    ///
    /// Inclusive against `other.min`, exclusive against `other.max`, so the
    /// test is not symmetric at shared edges: a box whose right edge touches
    /// `other`'s left edge overlaps it, but not the other way round. The empty
    /// box, or any malformed one, overlaps nothing.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.max.x >= other.min.x
            && self.min.x < other.max.x
            && self.max.y >= other.min.y
            && self.min.y < other.max.y
    }

    /// Splits the box at its midpoint into `[nw, ne, sw, se]`.
    pub fn split4(&self) -> [Self; 4] {
        let mid = self.center();
        [
            Self { min: self.min, max: mid },
            Self {
                min: DVec2::new(mid.x, self.min.y),
                max: DVec2::new(self.max.x, mid.y),
            },
            Self {
                min: DVec2::new(self.min.x, mid.y),
                max: DVec2::new(mid.x, self.max.y),
            },
            Self { min: mid, max: self.max },
        ]
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Hull of a sequence of boxes; [`Aabb::EMPTY`] for an empty sequence.
pub fn hull<'a, I>(boxes: I) -> Aabb
where
    I: IntoIterator<Item = &'a Aabb>,
{
    boxes.into_iter().fold(Aabb::EMPTY, |acc, b| acc.union(b))
}

/// Bounding box of a sequence of points, skipping points with a NaN
/// coordinate; [`Aabb::EMPTY`] if nothing is left.
pub fn point_hull<I>(points: I) -> Aabb
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .filter(|p| !p.is_nan())
        .fold(Aabb::EMPTY, |acc, p| acc.include_point(p))
}
