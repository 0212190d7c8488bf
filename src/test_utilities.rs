use crate::{ConvexPolygon, Point2};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f32, size: usize, seed: &[u8; 32]) -> Vec<Point2> {
    let mut rng = StdRng::from_seed(*seed);
    sample_points(&mut rng, Point2::ZERO, range, size)
}

pub fn random_points_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2> {
    random_points_in_range(1.0, size, seed)
}

fn sample_points(rng: &mut StdRng, center: Point2, range: f32, size: usize) -> Vec<Point2> {
    let range = Uniform::new(-range, range);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        let x = range.sample(rng);
        let y = range.sample(rng);
        points.push(center.add(Point2::new(x, y)));
    }
    points
}

/// Small hulls scattered around the origin, some of them overlapping.
pub fn random_polygons(count: usize, seed: &[u8; 32]) -> Vec<ConvexPolygon> {
    let mut rng = StdRng::from_seed(*seed);
    let centers = Uniform::new(-10.0f32, 10.0);
    let radii = Uniform::new(0.5f32, 3.0);
    (0..count)
        .map(|_| {
            let center = Point2::new(centers.sample(&mut rng), centers.sample(&mut rng));
            let radius = radii.sample(&mut rng);
            let size = rng.gen_range(3..12);
            ConvexPolygon::build(&sample_points(&mut rng, center, radius, size))
        })
        .collect()
}
