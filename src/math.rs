use crate::line_side_info::LineSideInfo;
use crate::point::{Point2, EPSILON, EPSILON_F64};

/// Indicates a point's projected position relative to a segment.
#[derive(Debug, Clone, Copy)]
pub struct PointProjection {
    factor: f32,
    length_2: f32,
}

impl PointProjection {
    fn new(factor: f32, length_2: f32) -> Self {
        Self { factor, length_2 }
    }

    /// Returns `true` if the projection lies before the segment's start.
    pub fn is_before_edge(&self) -> bool {
        self.factor < 0.0
    }

    /// Returns `true` if the projection lies behind the segment's end.
    pub fn is_behind_edge(&self) -> bool {
        self.factor > self.length_2
    }

    pub fn is_on_edge(&self) -> bool {
        !self.is_before_edge() && !self.is_behind_edge()
    }

    /// 0.0 at the segment's start, 1.0 at its end. Degenerate segments yield 0.0.
    pub fn relative_position(&self) -> f32 {
        if self.length_2 == 0.0 {
            0.0
        } else {
            self.factor / self.length_2
        }
    }
}

pub fn project_point(p1: Point2, p2: Point2, query_point: Point2) -> PointProjection {
    let dir = p2.sub(p1);
    PointProjection::new(query_point.sub(p1).dot(dir), dir.length2())
}

/// Returns the point of segment `p1 -> p2` closest to `query_point`.
pub fn nearest_point(p1: Point2, p2: Point2, query_point: Point2) -> Point2 {
    let s = project_point(p1, p2, query_point);
    if s.is_before_edge() {
        p1
    } else if s.is_behind_edge() {
        p2
    } else {
        p1.add(p2.sub(p1).mul(s.relative_position()))
    }
}

/// Squared distance between `query_point` and the segment `p1 -> p2`.
pub fn distance_2(p1: Point2, p2: Point2, query_point: Point2) -> f32 {
    query_point.distance_2(nearest_point(p1, p2, query_point))
}

/// Squared distance between two segments.
pub fn segment_distance_2(a0: Point2, a1: Point2, b0: Point2, b1: Point2) -> f32 {
    if segments_intersect(a0, a1, b0, b1) {
        return 0.0;
    }
    distance_2(a0, a1, b0)
        .min(distance_2(a0, a1, b1))
        .min(distance_2(b0, b1, a0))
        .min(distance_2(b0, b1, a1))
}

fn to_robust_coord(point: Point2) -> robust::Coord<f64> {
    let (x, y) = point.to_f64();
    robust::Coord { x, y }
}

/// Exact orientation of `query_point` relative to the directed line `p1 -> p2`.
pub fn side_query(p1: Point2, p2: Point2, query_point: Point2) -> LineSideInfo {
    let result = robust::orient2d(
        to_robust_coord(p1),
        to_robust_coord(p2),
        to_robust_coord(query_point),
    );
    LineSideInfo::from_determinant(result)
}

/// Orientation test that treats points within `tolerance` of the line as lying on it.
///
/// `tolerance` is a distance, the determinant is scaled by the line length before it
/// is compared.
pub fn side_query_with_tolerance(
    p1: Point2,
    p2: Point2,
    query_point: Point2,
    tolerance: f32,
) -> LineSideInfo {
    let determinant = f64::from(p2.sub(p1).cross(query_point.sub(p1)));
    let length = f64::from(p2.sub(p1).length()).max(EPSILON_F64);
    LineSideInfo::from_determinant_with_tolerance(determinant / length, f64::from(tolerance))
}

/// Signed perpendicular distance of `query_point` from the line through `p1` and `p2`.
/// Positive on the left side.
pub fn signed_distance(p1: Point2, p2: Point2, query_point: Point2) -> f32 {
    let dir = p2.sub(p1);
    let length = dir.length();
    if length < EPSILON {
        return query_point.distance(p1);
    }
    dir.cross(query_point.sub(p1)) / length
}

/// Returns `true` if `p` lies strictly inside the circumcircle of the ccw triangle
/// `v1, v2, v3`.
pub fn contained_in_circumference(v1: Point2, v2: Point2, v3: Point2, p: Point2) -> bool {
    // incircle expects its input ordered cw for a right handed system.
    robust::incircle(
        to_robust_coord(v3),
        to_robust_coord(v2),
        to_robust_coord(v1),
        to_robust_coord(p),
    ) < 0.0
}

/// Returns `true` if the closed segments `from0 -> to0` and `from1 -> to1` share a point.
///
/// Collinear segments fall back to an overlap test of their projections.
pub fn segments_intersect(from0: Point2, to0: Point2, from1: Point2, to1: Point2) -> bool {
    let other_from = side_query(from0, to0, from1);
    let other_to = side_query(from0, to0, to1);
    let self_from = side_query(from1, to1, from0);
    let self_to = side_query(from1, to1, to0);

    if [other_from, other_to, self_from, self_to]
        .iter()
        .all(|q| q.is_on_line())
    {
        return collinear_segments_overlap(from0, to0, from1, to1);
    }

    // An endpoint on the other line compares unequal to any proper side.
    other_from != other_to && self_from != self_to
}

fn collinear_segments_overlap(from0: Point2, to0: Point2, from1: Point2, to1: Point2) -> bool {
    let dir = to0.sub(from0);
    let dir = if dir.length2() == 0.0 {
        to1.sub(from1)
    } else {
        dir
    };
    if dir.length2() == 0.0 {
        return from0 == from1;
    }
    let project = |p: Point2| p.sub(from0).dot(dir);
    let (a0, a1) = min_max(project(from0), project(to0));
    let (b0, b1) = min_max(project(from1), project(to1));
    a0 <= b1 && b0 <= a1
}

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Calculates the intersection point of two segments.
///
/// Returns `None` if the segments do not touch. For near parallel segments, the first
/// endpoint of one segment that lies on the other one is returned.
pub fn segment_intersection(
    from0: Point2,
    to0: Point2,
    from1: Point2,
    to1: Point2,
) -> Option<Point2> {
    if !segments_intersect(from0, to0, from1, to1) {
        return None;
    }
    let d0 = to0.sub(from0);
    let d1 = to1.sub(from1);
    let denominator = d0.cross(d1);
    if denominator.abs() < EPSILON {
        // Parallel overlap, report a covered endpoint.
        return [from1, to1, from0, to0]
            .into_iter()
            .find(|&p| distance_2(from0, to0, p) < EPSILON && distance_2(from1, to1, p) < EPSILON);
    }
    let t = from1.sub(from0).cross(d1) / denominator;
    Some(from0.add(d0.mul(t)))
}

/// Twice the signed area of a polygon. Positive for ccw orientation.
pub fn double_signed_area(vertices: &[Point2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = vertices[vertices.len() - 1];
    for &current in vertices {
        sum += prev.cross(current);
        prev = current;
    }
    sum
}
