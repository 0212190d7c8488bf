use std::ops::Range;

use smallvec::SmallVec;

use crate::math;
use crate::point::{Point2, GEOMETRIC_EPSILON};
use crate::DEGENERATE_HULL_OFFSET;

/// An open part of the hull: every point in `range` lies strictly right of
/// `start -> end`, i.e. outside the hull built so far.
#[derive(Debug, Clone)]
struct Task {
    start: Point2,
    end: Point2,
    range: Range<usize>,
}

/// Returns the hull vertices in counterclockwise order, starting at the leftmost point.
///
/// Uses an explicit task stack instead of recursion. Each task's points are partitioned in
/// place, points that end up inside the hull are never looked at again.
pub(super) fn quickhull(points: &[Point2]) -> Vec<Point2> {
    debug_assert!(points.len() >= 3);

    let (leftmost, rightmost) = extreme_points(points);

    // Lower candidates first, upper candidates behind them.
    let mut scratch: Vec<Point2> = Vec::with_capacity(points.len());
    scratch.extend(
        points
            .iter()
            .copied()
            .filter(|&p| is_outside(leftmost, rightmost, p)),
    );
    let lower_end = scratch.len();
    scratch.extend(
        points
            .iter()
            .copied()
            .filter(|&p| is_outside(rightmost, leftmost, p)),
    );
    let upper_end = scratch.len();

    let mut stack: SmallVec<[Task; 32]> = SmallVec::new();
    stack.push(Task {
        start: rightmost,
        end: leftmost,
        range: lower_end..upper_end,
    });
    stack.push(Task {
        start: leftmost,
        end: rightmost,
        range: 0..lower_end,
    });

    let mut result = Vec::new();
    while let Some(task) = stack.pop() {
        let Some(farthest) = farthest_point(&scratch[task.range.clone()], task.start, task.end)
        else {
            if result.last() != Some(&task.start) {
                result.push(task.start);
            }
            continue;
        };

        let (first, second) = partition(&mut scratch, task.range, task.start, farthest, task.end);
        // The left task is popped first, which keeps the output ordered.
        stack.push(Task {
            start: farthest,
            end: task.end,
            range: second,
        });
        stack.push(Task {
            start: task.start,
            end: farthest,
            range: first,
        });
    }

    if result.len() < 3 {
        tracing::debug!(
            num_points = points.len(),
            "collinear point set, promoting hull to a thin triangle"
        );
        return thin_triangle(leftmost, rightmost);
    }
    result
}

/// Lexicographically smallest and largest point.
fn extreme_points(points: &[Point2]) -> (Point2, Point2) {
    let mut leftmost = points[0];
    let mut rightmost = points[0];
    for &p in &points[1..] {
        if p.lexicographic_cmp(&leftmost).is_lt() {
            leftmost = p;
        }
        if p.lexicographic_cmp(&rightmost).is_gt() {
            rightmost = p;
        }
    }
    (leftmost, rightmost)
}

#[inline]
fn outside_distance(start: Point2, end: Point2, p: Point2) -> f32 {
    -math::signed_distance(start, end, p)
}

#[inline]
fn is_outside(start: Point2, end: Point2, p: Point2) -> bool {
    outside_distance(start, end, p) > GEOMETRIC_EPSILON
}

/// The first point with maximal distance right of `start -> end`, if any lies outside.
fn farthest_point(points: &[Point2], start: Point2, end: Point2) -> Option<Point2> {
    let mut best: Option<(Point2, f32)> = None;
    for &p in points {
        let distance = outside_distance(start, end, p);
        if distance <= GEOMETRIC_EPSILON {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance >= distance => {}
            _ => best = Some((p, distance)),
        }
    }
    best.map(|(p, _)| p)
}

/// Three way partition of `scratch[range]`.
///
/// Points outside `start -> farthest` are moved to the front, points outside
/// `farthest -> end` to the back. Everything in between lies inside the triangle
/// `start, farthest, end` and is dropped.
fn partition(
    scratch: &mut [Point2],
    range: Range<usize>,
    start: Point2,
    farthest: Point2,
    end: Point2,
) -> (Range<usize>, Range<usize>) {
    let mut low = range.start;
    let mut mid = range.start;
    let mut high = range.end;
    while mid < high {
        let p = scratch[mid];
        if is_outside(start, farthest, p) {
            scratch.swap(low, mid);
            low += 1;
            mid += 1;
        } else if is_outside(farthest, end, p) {
            high -= 1;
            scratch.swap(mid, high);
        } else {
            mid += 1;
        }
    }
    (range.start..low, high..range.end)
}

fn thin_triangle(leftmost: Point2, rightmost: Point2) -> Vec<Point2> {
    match rightmost.sub(leftmost).normalize() {
        Some(direction) => {
            let middle = leftmost.add(rightmost).mul(0.5);
            let apex = middle.add(direction.perpendicular().mul(DEGENERATE_HULL_OFFSET));
            let mut triangle = vec![leftmost, rightmost, apex];
            // A (nearly) vertical line puts the apex left of `leftmost`.
            if apex.lexicographic_cmp(&leftmost).is_lt() {
                triangle.rotate_right(1);
            }
            triangle
        }
        None => vec![
            leftmost,
            leftmost.add(Point2::new(DEGENERATE_HULL_OFFSET, 0.0)),
            leftmost.add(Point2::new(0.0, DEGENERATE_HULL_OFFSET)),
        ],
    }
}

#[cfg(test)]
mod test {
    use super::super::ConvexPolygon;
    use crate::test_utilities::*;
    use crate::{math, Point2};
    use approx::assert_relative_eq;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn assert_is_convex_ccw(vertices: &[Point2]) {
        let n = vertices.len();
        assert!(n >= 3);
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            assert!(
                math::side_query(a, b, c).is_on_left_side(),
                "not a strict left turn at {:?}",
                b
            );
        }
    }

    #[test]
    fn test_interior_point_is_discarded() {
        let hull = ConvexPolygon::build(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
            Point2::new(0.0, 3.0),
            Point2::new(2.0, 1.0),
        ]);
        assert_eq!(
            hull.vertices(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 3.0),
                Point2::new(0.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_collinear_input_becomes_thin_triangle() {
        let points: Vec<_> = (0..10).map(|i| Point2::new(i as f32, i as f32 * 0.5)).collect();
        let hull = ConvexPolygon::build(&points);
        assert_eq!(hull.len(), 3);
        assert!(hull.area() > 0.0);
        assert_is_convex_ccw(hull.vertices());
        assert_eq!(hull.vertices()[0], Point2::new(0.0, 0.0));
        for p in points {
            assert!(hull.contains_with_tolerance(p, 1.0e-4));
        }
    }

    #[test]
    fn test_vertical_collinear_input() {
        let points: Vec<_> = (0..5).map(|i| Point2::new(2.0, i as f32)).collect();
        let hull = ConvexPolygon::build(&points);
        assert_eq!(hull.len(), 3);
        assert_is_convex_ccw(hull.vertices());
        assert!(hull.vertices()[0].x < 2.0);
    }

    #[test]
    fn test_identical_points() {
        let p = Point2::new(3.0, 2.0);
        let hull = ConvexPolygon::build(&[p, p, p, p]);
        assert_eq!(hull.len(), 3);
        assert!(hull.area() > 0.0);
        assert!(hull.contains(p));
    }

    #[test]
    fn test_collinear_points_on_hull_edge() {
        let hull = ConvexPolygon::build(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(0.0, 3.0),
            Point2::new(0.0, 1.5),
        ]);
        assert_eq!(hull.len(), 4);
        assert_is_convex_ccw(hull.vertices());
    }

    #[test]
    fn test_random_hulls_are_convex_and_contain_input() {
        for seed in [SEED, SEED2] {
            let points = random_points_in_range(100.0, 500, seed);
            let hull = ConvexPolygon::build(&points);
            assert_is_convex_ccw(hull.vertices());
            for p in &points {
                assert!(hull.contains_with_tolerance(*p, 2.0e-3));
            }
            // Removing any vertex must cut off a triangle of positive area.
            let vertices = hull.vertices();
            let n = vertices.len();
            for i in 0..n {
                let prev = vertices[(i + n - 1) % n];
                let next = vertices[(i + 1) % n];
                assert!(math::side_query(prev, vertices[i], next).signed_side() > 0.0);
            }
        }
    }

    #[test]
    fn test_hull_is_idempotent() {
        let mut points = random_points_in_range(7.0, 200, SEED);
        points.extend((0..16).map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 16.0;
            Point2::new(angle.cos() * 10.0, angle.sin() * 10.0)
        }));
        let hull = ConvexPolygon::build(&points);
        assert_eq!(hull.len(), 16);
        let rehull = ConvexPolygon::build(hull.vertices());
        assert_eq!(hull, rehull);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut points = random_points_in_range(10.0, 300, SEED2);
        let hull = ConvexPolygon::build(&points);
        let mut rng = rand::rngs::StdRng::from_seed(*SEED);
        points.shuffle(&mut rng);
        let shuffled = ConvexPolygon::build(&points);
        assert_eq!(hull, shuffled);
        assert_relative_eq!(hull.area(), shuffled.area());
    }
}
