use std::cell::OnceCell;

use crate::math;
use crate::point::Point2;
use crate::rect::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct LineSegment {
    pub from: Point2,
    pub to: Point2,
}

impl LineSegment {
    pub const fn new(from: Point2, to: Point2) -> Self {
        LineSegment { from, to }
    }

    pub fn direction(&self) -> Point2 {
        self.to.sub(self.from)
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_corners(self.from, self.to)
    }

    pub fn nearest_point(&self, query_point: Point2) -> Point2 {
        math::nearest_point(self.from, self.to, query_point)
    }

    pub fn distance_2(&self, query_point: Point2) -> f32 {
        math::distance_2(self.from, self.to, query_point)
    }

    pub fn intersects(&self, other: &LineSegment) -> bool {
        math::segments_intersect(self.from, self.to, other.from, other.to)
    }

    /// See [math::segment_intersection] for the handling of parallel segments.
    pub fn intersection(&self, other: &LineSegment) -> Option<Point2> {
        math::segment_intersection(self.from, self.to, other.from, other.to)
    }
}

/// An ordered sequence of vertices connected by straight segments.
///
/// Bounding box and arc length are computed on first use and dropped whenever the
/// vertex sequence changes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Polyline {
    vertices: Vec<Point2>,
    #[cfg_attr(feature = "serde", serde(skip))]
    bounding_rect: OnceCell<Rect>,
    #[cfg_attr(feature = "serde", serde(skip))]
    length: OnceCell<f32>,
}

impl PartialEq for Polyline {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl FromIterator<Point2> for Polyline {
    fn from_iter<T: IntoIterator<Item = Point2>>(iter: T) -> Self {
        Polyline::new(iter.into_iter().collect())
    }
}

impl Polyline {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Polyline {
            vertices,
            bounding_rect: OnceCell::new(),
            length: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn push(&mut self, point: Point2) {
        self.vertices.push(point);
        self.invalidate();
    }

    pub fn extend<I: IntoIterator<Item = Point2>>(&mut self, points: I) {
        self.vertices.extend(points);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.bounding_rect.take();
        self.length.take();
    }

    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    pub fn bounding_rect(&self) -> Rect {
        *self
            .bounding_rect
            .get_or_init(|| Rect::from_points(self.vertices.iter().copied()))
    }

    /// The summed length of all segments.
    pub fn length(&self) -> f32 {
        *self
            .length
            .get_or_init(|| self.segments().map(|s| s.length()).sum())
    }

    /// Returns the point at the given arc length, clamped to the polyline's ends.
    pub fn point_at_length(&self, arc_length: f32) -> Option<Point2> {
        let first = *self.vertices.first()?;
        if arc_length <= 0.0 {
            return Some(first);
        }
        let mut remaining = arc_length;
        for segment in self.segments() {
            let length = segment.length();
            if remaining <= length && length > 0.0 {
                return Some(segment.from.add(segment.direction().mul(remaining / length)));
            }
            remaining -= length;
        }
        self.vertices.last().copied()
    }

    /// Squared distance from `query_point` to the closest segment.
    pub fn distance_2(&self, query_point: Point2) -> Option<f32> {
        match self.vertices.as_slice() {
            [] => None,
            [single] => Some(single.distance_2(query_point)),
            _ => self
                .segments()
                .map(|s| s.distance_2(query_point))
                .min_by(f32::total_cmp),
        }
    }
}
