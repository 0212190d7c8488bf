use super::{ConvexPolygon, Separation};
use crate::math;
use crate::point::Point2;

/// Computes the squared distance between two disjoint polygons by binary elimination.
///
/// Only the chains facing the separating line can contain the closest points: a vertex
/// belongs to a polygon's chain if one of its edges has an outward normal pointing
/// across the separating line. Along such a chain, the distance to the other polygon
/// has a single minimum. The longer chain is bisected first: at its middle vertex, the
/// angle between each incident edge and the direction towards the nearest point of the
/// other polygon decides which half can be dropped. This repeats until a single edge
/// remains, which is then used to bisect the other chain the same way.
///
/// Every step of the outer bisection bisects the inner chain to find the nearest point,
/// so a query takes O(log n * log m) after extracting both chains in O(n + m). The two
/// halvings are nested, not alternated.
pub(super) fn min_distance_squared(
    p: &ConvexPolygon,
    q: &ConvexPolygon,
    separation: &Separation,
) -> f32 {
    let direction = separation.direction;
    let p_chain = facing_chain(p.vertices(), direction);
    let q_chain = facing_chain(q.vertices(), direction.mul(-1.0));

    let (outer, inner) = if p_chain.len() >= q_chain.len() {
        (p_chain, q_chain)
    } else {
        (q_chain, p_chain)
    };

    let (a, b) = eliminate(&outer, |v| nearest_on_chain(&inner, v));
    let (from, to) = (outer[a], outer[b]);
    let (c, d) = eliminate(&inner, |v| math::nearest_point(from, to, v));

    math::segment_distance_2(from, to, inner[c], inner[d])
}

/// Returns the vertices of all edges whose outward normal points along `direction`, in
/// polygon order.
fn facing_chain(vertices: &[Point2], direction: Point2) -> Vec<Point2> {
    let n = vertices.len();
    let is_facing = |edge: usize| {
        let d = vertices[(edge + 1) % n].sub(vertices[edge]);
        Point2::new(d.y, -d.x).dot(direction) > 0.0
    };

    let Some(first) = (0..n).find(|&edge| is_facing(edge) && !is_facing((edge + n - 1) % n))
    else {
        // Can only happen for a direction collapsed by rounding. The support vertex
        // is the best remaining candidate.
        let support = vertices
            .iter()
            .copied()
            .max_by(|a, b| a.dot(direction).total_cmp(&b.dot(direction)));
        return support.into_iter().collect();
    };

    let mut chain = vec![vertices[first]];
    let mut edge = first;
    while is_facing(edge) && chain.len() <= n {
        chain.push(vertices[(edge + 1) % n]);
        edge = (edge + 1) % n;
    }
    chain
}

/// Bisects `chain` until at most two adjacent vertices remain. Returns their indices.
///
/// `nearest` must return the point of the opposite polygon (or segment) closest to a
/// chain vertex. If the direction towards that point forms an acute angle with the
/// next edge, the distance still decreases ahead and everything before the middle
/// vertex is dropped, and vice versa. If both angles are obtuse, the middle vertex
/// itself is closest.
fn eliminate(chain: &[Point2], nearest: impl Fn(Point2) -> Point2) -> (usize, usize) {
    if chain.len() <= 1 {
        return (0, 0);
    }
    let mut low = 0;
    let mut high = chain.len() - 1;
    while high - low >= 2 {
        let middle = low + (high - low) / 2;
        let vertex = chain[middle];
        let towards = nearest(vertex).sub(vertex);
        if chain[middle + 1].sub(vertex).dot(towards) > 0.0 {
            low = middle;
        } else if chain[middle - 1].sub(vertex).dot(towards) > 0.0 {
            high = middle;
        } else {
            return (middle, middle);
        }
    }
    (low, high)
}

fn nearest_on_chain(chain: &[Point2], target: Point2) -> Point2 {
    let (a, b) = eliminate(chain, |_| target);
    math::nearest_point(chain[a], chain[b], target)
}

#[cfg(test)]
mod test {
    use super::super::ConvexPolygon;
    use super::{eliminate, facing_chain, nearest_on_chain};
    use crate::Point2;
    use approx::assert_relative_eq;

    fn regular_polygon(center: Point2, radius: f32, corners: usize) -> ConvexPolygon {
        let points: Vec<_> = (0..corners)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / corners as f32;
                center.add(Point2::new(angle.cos(), angle.sin()).mul(radius))
            })
            .collect();
        ConvexPolygon::build(&points)
    }

    #[test]
    fn test_facing_chain() {
        let square = ConvexPolygon::build(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let chain = facing_chain(square.vertices(), Point2::new(1.0, 0.0));
        assert_eq!(chain, vec![Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)]);

        // The chain wraps around the first vertex.
        let chain = facing_chain(square.vertices(), Point2::new(-1.0, -1.0));
        assert_eq!(
            chain,
            vec![
                Point2::new(0.0, 1.0),
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_nearest_on_chain() {
        let chain: Vec<_> = (0..=20)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::PI / 20.0;
                Point2::new(angle.cos(), angle.sin())
            })
            .collect();
        let nearest = nearest_on_chain(&chain, Point2::new(0.0, 5.0));
        assert_relative_eq!(nearest.x, 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(nearest.y, 1.0, epsilon = 1.0e-5);
        assert_eq!(eliminate(&chain[..1], |p| p), (0, 0));
    }

    #[test]
    fn test_vertex_to_edge_distance() {
        let diamond = ConvexPolygon::build(&[
            Point2::new(5.0, 0.0),
            Point2::new(6.0, 1.0),
            Point2::new(7.0, 0.0),
            Point2::new(6.0, -1.0),
        ]);
        let square = ConvexPolygon::build(&[
            Point2::new(0.0, -2.0),
            Point2::new(3.0, -2.0),
            Point2::new(3.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert_relative_eq!(diamond.min_distance_squared(&square), 4.0);
        assert_relative_eq!(square.min_distance_squared(&diamond), 4.0);
    }

    #[test]
    fn test_regular_polygons() {
        let a = regular_polygon(Point2::new(0.0, 0.0), 1.0, 64);
        let b = regular_polygon(Point2::new(5.0, 3.0), 2.0, 50);
        let expected = super::super::brute_force::min_distance_squared(&a, &b);
        assert!(expected > 0.0);
        assert_relative_eq!(a.min_distance_squared(&b), expected, max_relative = 1.0e-4);
        assert_relative_eq!(b.min_distance_squared(&a), expected, max_relative = 1.0e-4);
    }
}
