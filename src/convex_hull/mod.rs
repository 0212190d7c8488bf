//! Convex polygons built with an iterative QuickHull, plus containment, intersection and
//! distance queries between them.

mod distance;
mod intersection;
mod quickhull;

use std::error::Error;
use std::fmt::Display;
use std::sync::OnceLock;

use crate::math;
use crate::point::Point2;
use crate::polyline::LineSegment;
use crate::rect::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use intersection::Separation;

/// The error type returned by [ConvexPolygon::try_build].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum HullError {
    /// Less than three points were given. Contains the number of points.
    TooFewPoints(usize),

    /// A coordinate was NaN or infinite.
    NonFinite,
}

impl Display for HullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HullError::TooFewPoints(count) => {
                write!(f, "a hull needs at least 3 points, got {}", count)
            }
            HullError::NonFinite => write!(f, "input contains a non finite coordinate"),
        }
    }
}

impl Error for HullError {}

/// A convex polygon.
///
/// The vertices are duplicate free, contain no collinear triples and are ordered
/// counterclockwise (positive orientation: the interior lies left of every edge). The
/// first vertex is always the lexicographically smallest one (smallest x, then smallest y).
/// Every polygon has at least three vertices and a positive area.
///
/// A polygon never changes after construction and can be shared between threads.
///
/// With the `serde` feature, a polygon is serialized as its vertex list. Deserialization
/// rebuilds the hull from that list, so any point set is accepted and stored vertices
/// that are out of order or not convex cannot break the invariants above.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde", try_from = "Vec<Point2>", into = "Vec<Point2>")
)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
    bounding_rect: OnceLock<Rect>,
}

impl TryFrom<Vec<Point2>> for ConvexPolygon {
    type Error = HullError;

    fn try_from(points: Vec<Point2>) -> Result<Self, Self::Error> {
        Self::try_build(&points)
    }
}

impl From<ConvexPolygon> for Vec<Point2> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.vertices
    }
}

impl PartialEq for ConvexPolygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl ConvexPolygon {
    /// Builds the convex hull of a point set.
    ///
    /// Collinear inputs are promoted to a thin triangle, see
    /// [DEGENERATE_HULL_OFFSET](crate::DEGENERATE_HULL_OFFSET).
    ///
    /// # Panics
    /// Panics if less than three points are given. Use [ConvexPolygon::try_build] for
    /// untrusted input.
    pub fn build(points: &[Point2]) -> Self {
        assert!(
            points.len() >= 3,
            "ConvexPolygon::build requires at least 3 points, got {}",
            points.len()
        );
        Self::from_hull_vertices(quickhull::quickhull(points))
    }

    /// Like [ConvexPolygon::build], but reports invalid input instead of panicking.
    pub fn try_build(points: &[Point2]) -> Result<Self, HullError> {
        if points.len() < 3 {
            return Err(HullError::TooFewPoints(points.len()));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(HullError::NonFinite);
        }
        Ok(Self::build(points))
    }

    fn from_hull_vertices(vertices: Vec<Point2>) -> Self {
        debug_assert!(vertices.len() >= 3, "hull with less than 3 vertices");
        debug_assert!(
            vertices
                .iter()
                .all(|v| v.lexicographic_cmp(&vertices[0]).is_ge()),
            "hull does not start at its leftmost vertex"
        );
        ConvexPolygon {
            vertices,
            bounding_rect: OnceLock::new(),
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`, a hull has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all edges in counterclockwise order, starting at the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn bounding_rect(&self) -> Rect {
        *self
            .bounding_rect
            .get_or_init(|| Rect::from_points(self.vertices.iter().copied()))
    }

    pub fn area(&self) -> f32 {
        math::double_signed_area(&self.vertices) * 0.5
    }

    /// The area centroid.
    pub fn centroid(&self) -> Point2 {
        let origin = self.vertices[0];
        let mut weighted = Point2::ZERO;
        let mut total = 0.0;
        for window in self.vertices[1..].windows(2) {
            let a = window[0].sub(origin);
            let b = window[1].sub(origin);
            let area = a.cross(b);
            weighted = weighted.add(a.add(b).mul(area));
            total += area;
        }
        origin.add(weighted.mul(1.0 / (3.0 * total)))
    }

    /// Returns `true` if `point` lies inside or on the border of this polygon.
    ///
    /// A point is outside if it lies strictly right of any edge.
    pub fn contains(&self, point: Point2) -> bool {
        self.edges()
            .all(|edge| !math::side_query(edge.from, edge.to, point).is_on_right_side())
    }

    /// Like [ConvexPolygon::contains] but accepts points up to `tolerance` outside.
    pub fn contains_with_tolerance(&self, point: Point2, tolerance: f32) -> bool {
        self.edges()
            .all(|edge| math::signed_distance(edge.from, edge.to, point) >= -tolerance)
    }

    /// Returns `true` if both polygons share at least one point, including the case
    /// where one polygon lies completely inside the other.
    pub fn intersects(&self, other: &ConvexPolygon) -> bool {
        if !self.bounding_rect().intersects(&other.bounding_rect()) {
            return false;
        }
        intersection::find_separation(self, other).is_none()
    }

    /// Returns a line separating both polygons, or `None` if they intersect.
    pub fn separation(&self, other: &ConvexPolygon) -> Option<Separation> {
        intersection::find_separation(self, other)
    }

    /// The squared minimal distance between both polygons. Zero if they intersect.
    pub fn min_distance_squared(&self, other: &ConvexPolygon) -> f32 {
        match intersection::find_separation(self, other) {
            None => 0.0,
            Some(separation) => distance::min_distance_squared(self, other, &separation),
        }
    }
}
