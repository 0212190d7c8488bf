//! # planar_kernel
//! A small 2D geometry kernel.
//!
//! # Features
//! * Value types: [Point2], [Angle], [Rect], [LineSegment] and [Polyline]
//! * Convex hulls built with an iterative QuickHull: [ConvexPolygon]
//!   * Point containment
//!   * Intersection tests between polygons with rotating calipers
//!   * Minimum distance between disjoint polygons in logarithmic time
//! * An incremental Delaunay triangulation on top of a quad edge structure: [DelaunayMesh]
//!   * Point location and nearest vertex queries
//!   * Enumeration of all edges connecting two sites
//!
//! Orientation and in-circle tests use the adaptive predicates of the `robust` crate.
//! All other comparisons use the fixed tolerances [EPSILON] and [GEOMETRIC_EPSILON].
//!
//! # Cargo features
//! * `serde`: (de)serialization of the value types, convex polygons and mesh vertices.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod angle;
mod convex_hull;
mod line_side_info;
mod point;
mod polyline;
mod quad_edge;
mod rect;

pub mod math;

#[cfg(test)]
mod test_utilities;

pub use angle::Angle;
pub use convex_hull::{ConvexPolygon, HullError, Separation};
pub use line_side_info::LineSideInfo;
pub use point::{nearly_equal, Point2, Vector2, EPSILON, EPSILON_F64, GEOMETRIC_EPSILON};
pub use polyline::{LineSegment, Polyline};
pub use quad_edge::{
    DelaunayMesh, EdgeHandle, FaceEdgesIterator, FixedEdgeHandle, InsertionOutcome,
    LiveEdgeIterator, MeshError, OutEdgesIterator, Vertex, VertexId,
};
pub use rect::Rect;

/// Distance by which a collinear point set is pushed apart to form a hull.
///
/// [ConvexPolygon::build] promotes collinear input to a thin triangle: the third vertex is
/// placed this far from the midpoint of the two extreme points, perpendicular to the line.
pub const DEGENERATE_HULL_OFFSET: f32 = 0.001;
