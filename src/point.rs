use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used for point equality and other single precision comparisons.
pub const EPSILON: f32 = 1.0e-6;

/// Tolerance used by geometric tests that work on user scale coordinates, e.g. the
/// minimal distance a point must have from a hull edge to be considered outside of it.
pub const GEOMETRIC_EPSILON: f32 = 1.0e-3;

/// Tolerance used when comparing double precision values.
pub const EPSILON_F64: f64 = 1.0e-6;

/// Returns `true` if `a` and `b` differ by less than `epsilon`.
#[inline]
pub fn nearly_equal<S: Float>(a: S, b: S, epsilon: S) -> bool {
    (a - b).abs() < epsilon
}

/// A two dimensional point.
///
/// This is the basic type used for defining positions. Equality is tolerant: two points
/// compare equal if both coordinates differ by less than [EPSILON].
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2 {
    /// The point's x coordinate
    pub x: f32,
    /// The point's y coordinate
    pub y: f32,
}

/// Vectors and points share the same representation.
pub type Vector2 = Point2;

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        nearly_equal(self.x, other.x, EPSILON) && nearly_equal(self.y, other.y, EPSILON)
    }
}

impl Point2 {
    /// The origin.
    pub const ZERO: Point2 = Point2::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }

    /// Returns `true` if both coordinates differ by less than `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: Self, epsilon: f32) -> bool {
        nearly_equal(self.x, other.x, epsilon) && nearly_equal(self.y, other.y, epsilon)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn add(&self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn mul(&self, factor: f32) -> Self {
        Point2::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of both vectors.
    ///
    /// Positive if `other` is rotated counterclockwise relative to `self`.
    #[inline]
    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> f32 {
        self.sub(other).length2()
    }

    pub fn distance(&self, other: Self) -> f32 {
        self.distance_2(other).sqrt()
    }

    /// Returns this vector scaled to unit length, or `None` for a (near) zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let length = self.length();
        if length < EPSILON {
            None
        } else {
            Some(self.mul(1.0 / length))
        }
    }

    /// Rotates this vector by 90 degrees counterclockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Point2::new(-self.y, self.x)
    }

    /// Compares two points by x, then by y.
    pub fn lexicographic_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    pub(crate) fn to_f64(self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

impl From<Point2> for [f32; 2] {
    #[inline]
    fn from(point: Point2) -> Self {
        [point.x, point.y]
    }
}

impl From<[f32; 2]> for Point2 {
    #[inline]
    fn from(source: [f32; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl From<(f32, f32)> for Point2 {
    #[inline]
    fn from(source: (f32, f32)) -> Self {
        Self::new(source.0, source.1)
    }
}
