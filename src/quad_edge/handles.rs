use std::convert::TryInto;

use super::iterators::{FaceEdgesIterator, OutEdgesIterator};
use super::quad_edge_mesh::QuadEdgeMesh;
use super::Vertex;
use crate::math;
use crate::point::Point2;

/// A directed edge role inside a quad edge bundle.
///
/// The handle packs the bundle's index and one of four roles: `0` is the edge itself,
/// `1` its dual (rotated by 90 degrees), `2` the reversed edge and `3` the reversed dual.
/// All navigation that does not require the mutable `next` links is plain index
/// arithmetic on the role.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedEdgeHandle {
    index: u32,
}

impl std::fmt::Debug for FixedEdgeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedEdgeHandle")
            .field("quad_edge", &self.quad_edge())
            .field("role", &self.role())
            .finish()
    }
}

impl FixedEdgeHandle {
    pub(crate) fn new(quad_edge: usize, role: usize) -> Self {
        debug_assert!(role < 4);
        let index: u32 = (quad_edge * 4 + role)
            .try_into()
            .expect("Index too big - at most 2^30 quad edges supported");
        FixedEdgeHandle { index }
    }

    /// The index of the quad edge bundle this role belongs to.
    #[inline]
    pub fn quad_edge(&self) -> usize {
        (self.index >> 2) as usize
    }

    #[inline]
    pub fn role(&self) -> usize {
        (self.index & 0x3) as usize
    }

    /// Returns `true` for the edge and its reverse, `false` for the two dual roles.
    #[inline]
    pub fn is_primal(&self) -> bool {
        self.index & 0x1 == 0
    }

    #[inline]
    fn with_role_offset(&self, offset: u32) -> Self {
        FixedEdgeHandle {
            index: (self.index & !0x3) | ((self.index + offset) & 0x3),
        }
    }

    /// The dual edge, directed from the right face to the left face.
    #[inline]
    pub fn rot(&self) -> Self {
        self.with_role_offset(1)
    }

    /// The same edge with origin and destination swapped.
    #[inline]
    pub fn sym(&self) -> Self {
        self.with_role_offset(2)
    }

    #[inline]
    pub fn rot_inv(&self) -> Self {
        self.with_role_offset(3)
    }
}

/// Refers to a vertex stored in a mesh.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FixedVertexHandle {
    index: u32,
}

impl FixedVertexHandle {
    pub(crate) fn new(index: usize) -> Self {
        FixedVertexHandle {
            index: index
                .try_into()
                .expect("Index too big - at most 2^32 vertices supported"),
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }
}

/// An edge handle bound to the mesh it belongs to.
///
/// Offers the combinatorial edge algebra (`onext`, `lnext`, `dprev`, ...) and access to
/// the edge's end points. Only primal roles have end points.
#[derive(Clone, Copy)]
pub struct EdgeHandle<'a> {
    pub(super) mesh: &'a QuadEdgeMesh,
    pub(super) handle: FixedEdgeHandle,
}

impl PartialEq for EdgeHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for EdgeHandle<'_> {}

impl std::fmt::Debug for EdgeHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("EdgeHandle");
        s.field("handle", &self.handle);
        if self.handle.is_primal() {
            s.field("from", &self.from().id).field("to", &self.to().id);
        }
        s.finish()
    }
}

impl<'a> EdgeHandle<'a> {
    pub(super) fn new(mesh: &'a QuadEdgeMesh, handle: FixedEdgeHandle) -> Self {
        EdgeHandle { mesh, handle }
    }

    fn with(&self, handle: FixedEdgeHandle) -> Self {
        EdgeHandle::new(self.mesh, handle)
    }

    /// Returns the underlying fixed handle, which does not borrow the mesh.
    pub fn fix(&self) -> FixedEdgeHandle {
        self.handle
    }

    pub fn from(&self) -> &'a Vertex {
        self.mesh.vertex_entry(self.mesh.origin(self.handle))
    }

    pub fn to(&self) -> &'a Vertex {
        self.mesh.vertex_entry(self.mesh.origin(self.handle.sym()))
    }

    pub fn positions(&self) -> [Point2; 2] {
        [self.from().position, self.to().position]
    }

    /// Returns `true` if the edge touches one of the synthetic border vertices.
    pub fn is_border(&self) -> bool {
        self.from().is_border() || self.to().is_border()
    }

    pub fn is_deleted(&self) -> bool {
        self.mesh.is_deleted(self.handle)
    }

    pub fn rot(&self) -> Self {
        self.with(self.handle.rot())
    }

    pub fn sym(&self) -> Self {
        self.with(self.handle.sym())
    }

    pub fn rot_inv(&self) -> Self {
        self.with(self.handle.rot_inv())
    }

    /// The next edge counterclockwise around the origin.
    pub fn onext(&self) -> Self {
        self.with(self.mesh.onext(self.handle))
    }

    /// The next edge clockwise around the origin.
    pub fn oprev(&self) -> Self {
        self.with(self.mesh.oprev(self.handle))
    }

    /// The next edge counterclockwise around the left face.
    pub fn lnext(&self) -> Self {
        self.with(self.mesh.lnext(self.handle))
    }

    pub fn lprev(&self) -> Self {
        self.with(self.mesh.lprev(self.handle))
    }

    pub fn rnext(&self) -> Self {
        self.with(self.mesh.rnext(self.handle))
    }

    pub fn rprev(&self) -> Self {
        self.with(self.mesh.rprev(self.handle))
    }

    pub fn dnext(&self) -> Self {
        self.with(self.mesh.dnext(self.handle))
    }

    pub fn dprev(&self) -> Self {
        self.with(self.mesh.dprev(self.handle))
    }

    /// All edges leaving this edge's origin, counterclockwise, starting with this edge.
    pub fn out_edges(&self) -> OutEdgesIterator<'a> {
        OutEdgesIterator::new(*self)
    }

    /// All edges around this edge's left face, counterclockwise, starting with this edge.
    pub fn face_edges(&self) -> FaceEdgesIterator<'a> {
        FaceEdgesIterator::new(*self)
    }

    /// Returns `true` if `point` lies strictly right of this edge.
    pub fn is_right_of(&self, point: Point2) -> bool {
        let [from, to] = self.positions();
        math::side_query(from, to, point).is_on_right_side()
    }
}
