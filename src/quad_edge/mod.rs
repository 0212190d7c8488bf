//! A quad edge mesh and an incremental Delaunay triangulation built on top of it.

mod delaunay;
mod handles;
mod iterators;
mod quad_edge_mesh;

use crate::point::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use delaunay::{DelaunayMesh, InsertionOutcome, MeshError};
pub use handles::{EdgeHandle, FixedEdgeHandle};
pub use iterators::{FaceEdgesIterator, LiveEdgeIterator, OutEdgesIterator};

/// Identifies a vertex. Non negative ids are sites, negative ids border vertices.
pub type VertexId = i32;

/// A mesh vertex: a position and an id.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Vertex {
    pub position: Point2,
    pub id: VertexId,
}

impl Vertex {
    pub const fn new(position: Point2, id: VertexId) -> Self {
        Vertex { position, id }
    }

    /// Returns `true` for the synthetic vertices spanning the border triangle.
    pub fn is_border(&self) -> bool {
        self.id < 0
    }
}
