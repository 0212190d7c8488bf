use super::handles::{EdgeHandle, FixedEdgeHandle, FixedVertexHandle};
use super::iterators::LiveEdgeIterator;
use super::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct QuadEdgeEntry {
    /// `onext` link of each role.
    next: [FixedEdgeHandle; 4],
    /// Origin of the two primal roles. Faces are never stored, the dual roles only
    /// take part in navigation.
    origin: [FixedVertexHandle; 2],
    deleted: bool,
}

/// An arena based quad edge structure.
///
/// Quad edges are never removed from the arena. [QuadEdgeMesh::delete_edge] disconnects an
/// edge and marks it as deleted, iteration skips deleted entries.
#[derive(Clone, Debug, Default)]
pub struct QuadEdgeMesh {
    vertices: Vec<Vertex>,
    quad_edges: Vec<QuadEdgeEntry>,
    num_deleted: usize,
}

impl QuadEdgeMesh {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of quad edges in the arena, including deleted ones.
    pub fn num_quad_edges(&self) -> usize {
        self.quad_edges.len()
    }

    pub fn num_live_edges(&self) -> usize {
        self.quad_edges.len() - self.num_deleted
    }

    pub fn add_vertex(&mut self, vertex: Vertex) -> FixedVertexHandle {
        let handle = FixedVertexHandle::new(self.vertices.len());
        self.vertices.push(vertex);
        handle
    }

    pub fn vertex_entry(&self, handle: FixedVertexHandle) -> &Vertex {
        &self.vertices[handle.index()]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edge(&self, handle: FixedEdgeHandle) -> EdgeHandle<'_> {
        EdgeHandle::new(self, handle)
    }

    /// All live primal edges, one direction per quad edge.
    pub fn live_edges(&self) -> LiveEdgeIterator<'_> {
        LiveEdgeIterator::new(self)
    }

    pub fn is_deleted(&self, handle: FixedEdgeHandle) -> bool {
        self.quad_edges[handle.quad_edge()].deleted
    }

    pub fn origin(&self, handle: FixedEdgeHandle) -> FixedVertexHandle {
        debug_assert!(handle.is_primal(), "dual edges have no origin");
        self.quad_edges[handle.quad_edge()].origin[handle.role() >> 1]
    }

    fn set_end_points(
        &mut self,
        handle: FixedEdgeHandle,
        from: FixedVertexHandle,
        to: FixedVertexHandle,
    ) {
        let entry = &mut self.quad_edges[handle.quad_edge()];
        let role = handle.role() >> 1;
        entry.origin[role] = from;
        entry.origin[role ^ 1] = to;
    }

    #[inline]
    pub fn onext(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.quad_edges[handle.quad_edge()].next[handle.role()]
    }

    #[inline]
    fn set_onext(&mut self, handle: FixedEdgeHandle, next: FixedEdgeHandle) {
        self.quad_edges[handle.quad_edge()].next[handle.role()] = next;
    }

    pub fn oprev(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.rot()).rot()
    }

    pub fn lnext(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.rot_inv()).rot()
    }

    pub fn lprev(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle).sym()
    }

    pub fn rnext(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.rot()).rot_inv()
    }

    pub fn rprev(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.sym())
    }

    pub fn dnext(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.sym()).sym()
    }

    pub fn dprev(&self, handle: FixedEdgeHandle) -> FixedEdgeHandle {
        self.onext(handle.rot_inv()).rot_inv()
    }

    /// Creates an isolated edge `from -> to`. Both of its primal rings contain only
    /// the edge itself.
    pub fn make_edge(
        &mut self,
        from: FixedVertexHandle,
        to: FixedVertexHandle,
    ) -> FixedEdgeHandle {
        let index = self.quad_edges.len();
        let role = |r| FixedEdgeHandle::new(index, r);
        self.quad_edges.push(QuadEdgeEntry {
            next: [role(0), role(3), role(2), role(1)],
            origin: [from, to],
            deleted: false,
        });
        role(0)
    }

    /// The fundamental topological operator.
    ///
    /// Exchanges the origin rings of `a` and `b` and, at the same time, the left face rings
    /// of their duals. Merges the rings if they differ and splits them otherwise. Applying
    /// the same splice twice restores the previous state.
    pub fn splice(&mut self, a: FixedEdgeHandle, b: FixedEdgeHandle) {
        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha = a_next.rot();
        let beta = b_next.rot();
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.set_onext(a, b_next);
        self.set_onext(b, a_next);
        self.set_onext(alpha, beta_next);
        self.set_onext(beta, alpha_next);
    }

    /// Adds an edge from the destination of `a` to the origin of `b`.
    ///
    /// Afterwards, `a`, the new edge and `b` share the same left face.
    pub fn connect(&mut self, a: FixedEdgeHandle, b: FixedEdgeHandle) -> FixedEdgeHandle {
        let from = self.origin(a.sym());
        let to = self.origin(b);
        let edge = self.make_edge(from, to);
        let a_lnext = self.lnext(a);
        self.splice(edge, a_lnext);
        self.splice(edge.sym(), b);
        edge
    }

    /// Disconnects an edge from the mesh and marks it as deleted.
    pub fn delete_edge(&mut self, edge: FixedEdgeHandle) {
        debug_assert!(!self.is_deleted(edge), "edge was already deleted");
        let oprev = self.oprev(edge);
        self.splice(edge, oprev);
        let sym_oprev = self.oprev(edge.sym());
        self.splice(edge.sym(), sym_oprev);
        self.quad_edges[edge.quad_edge()].deleted = true;
        self.num_deleted += 1;
    }

    /// Rotates an edge counterclockwise inside the quadrilateral formed by its two adjacent
    /// triangles.
    ///
    /// The edge keeps its handle and ends up connecting the two vertices opposite to it.
    pub fn swap(&mut self, edge: FixedEdgeHandle) {
        let a = self.oprev(edge);
        let b = self.oprev(edge.sym());
        self.splice(edge, a);
        self.splice(edge.sym(), b);
        let a_lnext = self.lnext(a);
        self.splice(edge, a_lnext);
        let b_lnext = self.lnext(b);
        self.splice(edge.sym(), b_lnext);
        let from = self.origin(a.sym());
        let to = self.origin(b.sym());
        self.set_end_points(edge, from, to);
    }

    /// Checks that all `onext` links are consistent with the edge algebra.
    #[cfg(test)]
    pub fn sanity_check(&self) {
        for (index, entry) in self.quad_edges.iter().enumerate() {
            if entry.deleted {
                continue;
            }
            for role in 0..4 {
                let edge = FixedEdgeHandle::new(index, role);
                // Rot^-1 . Onext . Rot . Onext is the identity.
                assert_eq!(self.onext(self.onext(edge.rot()).rot()), edge);
                assert!(!self.is_deleted(self.onext(edge)));
                if edge.is_primal() {
                    assert_eq!(self.origin(self.onext(edge)), self.origin(edge));
                    assert_eq!(self.origin(self.lnext(edge)), self.origin(edge.sym()));
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::handles::FixedEdgeHandle;
    use super::super::Vertex;
    use super::QuadEdgeMesh;
    use crate::Point2;

    /// Square a, b, c, d with all four boundary edges. Returns the edges a->b, b->c, c->d
    /// and d->a.
    fn square() -> (QuadEdgeMesh, [FixedEdgeHandle; 4]) {
        let mut mesh = QuadEdgeMesh::new();
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let vertices: Vec<_> = corners
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| mesh.add_vertex(Vertex::new(Point2::new(x, y), id as i32)))
            .collect();

        let mut edges: Vec<FixedEdgeHandle> = Vec::new();
        for i in 0..4 {
            let edge = mesh.make_edge(vertices[i], vertices[(i + 1) % 4]);
            if let Some(&previous) = edges.last() {
                mesh.splice(previous.sym(), edge);
            }
            edges.push(edge);
        }
        mesh.splice(edges[3].sym(), edges[0]);
        (mesh, [edges[0], edges[1], edges[2], edges[3]])
    }

    fn ids(mesh: &QuadEdgeMesh, edge: FixedEdgeHandle) -> (i32, i32) {
        let edge = mesh.edge(edge);
        (edge.from().id, edge.to().id)
    }

    #[test]
    fn test_make_edge() {
        let mut mesh = QuadEdgeMesh::new();
        let a = mesh.add_vertex(Vertex::new(Point2::new(0.0, 0.0), 0));
        let b = mesh.add_vertex(Vertex::new(Point2::new(1.0, 0.0), 1));
        let e = mesh.make_edge(a, b);
        assert_eq!(mesh.onext(e), e);
        assert_eq!(mesh.onext(e.sym()), e.sym());
        assert_eq!(mesh.onext(e.rot()), e.rot_inv());
        assert_eq!(mesh.lnext(e), e.sym());
        assert_eq!(ids(&mesh, e), (0, 1));
        assert_eq!(ids(&mesh, e.sym()), (1, 0));
        mesh.sanity_check();
    }

    #[test]
    fn test_face_ring() {
        let (mesh, [ab, bc, cd, da]) = square();
        assert_eq!(mesh.lnext(ab), bc);
        assert_eq!(mesh.lnext(bc), cd);
        assert_eq!(mesh.lnext(cd), da);
        assert_eq!(mesh.lnext(da), ab);
        assert_eq!(mesh.lprev(ab), da);
        assert_eq!(mesh.rprev(ab), bc);
        assert_eq!(mesh.dnext(ab), bc.sym());
        mesh.sanity_check();
    }

    #[test]
    fn test_splice_is_an_involution() {
        let (mut mesh, [ab, bc, _, da]) = square();
        let before = mesh.clone();
        mesh.splice(ab, bc);
        mesh.splice(ab, bc);
        assert_eq!(mesh.quad_edges, before.quad_edges);
        mesh.splice(da.sym(), ab);
        mesh.splice(da.sym(), ab);
        assert_eq!(mesh.quad_edges, before.quad_edges);
    }

    #[test]
    fn test_connect_splits_face() {
        let (mut mesh, [ab, bc, cd, da]) = square();
        let diagonal = mesh.connect(bc, ab);
        assert_eq!(ids(&mesh, diagonal), (2, 0));
        assert_eq!(mesh.lnext(bc), diagonal);
        assert_eq!(mesh.lnext(diagonal), ab);
        assert_eq!(mesh.lnext(ab), bc);
        assert_eq!(mesh.lnext(diagonal.sym()), cd);
        assert_eq!(mesh.lnext(da), diagonal.sym());
        mesh.sanity_check();
    }

    #[test]
    fn test_swap_rotates_diagonal() {
        let (mut mesh, [ab, bc, cd, da]) = square();
        let diagonal = mesh.connect(bc, ab);
        mesh.swap(diagonal);
        assert_eq!(ids(&mesh, diagonal), (3, 1));
        assert_eq!(mesh.lnext(diagonal), bc);
        assert_eq!(mesh.lnext(bc), cd);
        assert_eq!(mesh.lnext(cd), diagonal);
        assert_eq!(mesh.lnext(diagonal.sym()), da);
        assert_eq!(mesh.lnext(da), ab);
        assert_eq!(mesh.lnext(ab), diagonal.sym());
        mesh.sanity_check();
    }

    #[test]
    fn test_delete_edge_merges_faces() {
        let (mut mesh, [ab, bc, cd, da]) = square();
        let diagonal = mesh.connect(bc, ab);
        assert_eq!(mesh.num_live_edges(), 5);
        mesh.delete_edge(diagonal);
        assert!(mesh.is_deleted(diagonal));
        assert_eq!(mesh.num_live_edges(), 4);
        assert_eq!(mesh.num_quad_edges(), 5);
        assert_eq!(mesh.lnext(ab), bc);
        assert_eq!(mesh.lnext(bc), cd);
        assert_eq!(mesh.lnext(cd), da);
        assert_eq!(mesh.lnext(da), ab);
        assert_eq!(mesh.live_edges().count(), 4);
        mesh.sanity_check();
    }
}
