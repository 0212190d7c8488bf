use super::ConvexPolygon;
use crate::math;
use crate::point::Point2;

/// A line separating two convex polygons.
///
/// Created by [ConvexPolygon::separation].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// A point on the separating line. The line is flush with an edge of one of the
    /// two polygons.
    pub origin: Point2,
    /// Normal of the separating line, pointing from the first polygon towards the second.
    /// Not normalized.
    pub direction: Point2,
}

#[inline]
fn outward_normal(edge: Point2) -> Point2 {
    Point2::new(edge.y, -edge.x)
}

/// Sweeps two antipodal calipers around both polygons.
///
/// `p`'s caliper starts at its leftmost vertex, pointing straight down, `q`'s caliper at
/// its rightmost vertex, pointing straight up. In each step, the caliper that reaches its
/// next edge with the smaller turn is advanced (both on ties). Whenever a caliper lies
/// flush with an edge, the other polygon's support vertex is tested against that edge:
/// if it lies strictly outside, the edge's line separates both polygons.
///
/// Every edge normal of both polygons is visited once, hence the sweep takes
/// `p.len() + q.len()` steps. Returns `None` if no edge separates the polygons, which
/// includes the case of one polygon lying inside the other.
pub(super) fn find_separation(p: &ConvexPolygon, q: &ConvexPolygon) -> Option<Separation> {
    let pv = p.vertices();
    let qv = q.vertices();
    let (n, m) = (pv.len(), qv.len());

    debug_assert!(
        pv.iter().all(|v| v.lexicographic_cmp(&pv[0]).is_ge()),
        "polygon does not start at its leftmost vertex"
    );

    let q_start = rightmost_index(qv);

    let mut i = 0;
    let mut j = q_start;
    let mut p_steps = 0;
    let mut q_steps = 0;
    let mut num_iterations = 0;

    while p_steps < n || q_steps < m {
        num_iterations += 1;
        debug_assert!(
            num_iterations <= n + m,
            "caliper sweep did not terminate after {} steps",
            n + m
        );

        let p_edge = pv[(i + 1) % n].sub(pv[i]);
        let q_edge = qv[(j + 1) % m].sub(qv[j]);

        let (advance_p, advance_q) = if p_steps == n {
            (false, true)
        } else if q_steps == m {
            (true, false)
        } else {
            // Both remaining turns are smaller than PI, so comparing the edge
            // directions (with q's edge rotated by PI) is sufficient.
            let turn = p_edge.cross(q_edge.mul(-1.0));
            if turn > 0.0 {
                (true, false)
            } else if turn < 0.0 {
                (false, true)
            } else {
                (true, true)
            }
        };

        if advance_p {
            // q's support vertex towards p's edge is still qv[j].
            let from = pv[i];
            let to = pv[(i + 1) % n];
            if math::side_query(from, to, qv[j]).is_on_right_side() {
                return Some(Separation {
                    origin: from,
                    direction: outward_normal(p_edge),
                });
            }
        }
        if advance_q {
            let from = qv[j];
            let to = qv[(j + 1) % m];
            if math::side_query(from, to, pv[i]).is_on_right_side() {
                return Some(Separation {
                    origin: from,
                    direction: outward_normal(q_edge).mul(-1.0),
                });
            }
        }

        if advance_p {
            i = (i + 1) % n;
            p_steps += 1;
        }
        if advance_q {
            j = (j + 1) % m;
            q_steps += 1;
        }
    }
    None
}

fn rightmost_index(vertices: &[Point2]) -> usize {
    let mut result = 0;
    for (index, v) in vertices.iter().enumerate().skip(1) {
        if v.lexicographic_cmp(&vertices[result]).is_gt() {
            result = index;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::super::ConvexPolygon;
    use crate::Point2;

    fn triangle(points: [(f32, f32); 3]) -> ConvexPolygon {
        let points: Vec<Point2> = points.iter().map(|&p| p.into()).collect();
        ConvexPolygon::build(&points)
    }

    #[test]
    fn test_separation_direction_points_towards_other() {
        let a = triangle([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let b = triangle([(3.0, 3.0), (4.0, 3.0), (3.0, 4.0)]);
        let projected_gap = |first: &ConvexPolygon, second: &ConvexPolygon| {
            let separation = first.separation(second).unwrap();
            let project = |v: &Point2| v.dot(separation.direction);
            let first_max = first.vertices().iter().map(project).fold(f32::MIN, f32::max);
            let second_min = second.vertices().iter().map(project).fold(f32::MAX, f32::min);
            second_min - first_max
        };
        assert!(projected_gap(&a, &b) > 0.0);
        assert!(projected_gap(&b, &a) > 0.0);
    }

    #[test]
    fn test_crossing_triangles() {
        // Star of David: no vertex of one lies inside the other.
        let a = triangle([(0.0, 0.0), (6.0, 0.0), (3.0, 5.0)]);
        let b = triangle([(0.0, 3.5), (6.0, 3.5), (3.0, -1.5)]);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.separation(&b).is_none());
    }

    #[test]
    fn test_bounding_boxes_overlap_but_polygons_do_not() {
        let a = triangle([(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let b = triangle([(4.0, 4.0), (2.5, 4.0), (4.0, 2.5)]);
        assert!(a.bounding_rect().intersects(&b.bounding_rect()));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }
}
