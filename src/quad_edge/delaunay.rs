use std::error::Error;
use std::fmt::Display;

use hashbrown::HashMap;

use super::handles::{EdgeHandle, FixedEdgeHandle, FixedVertexHandle};
use super::iterators::LiveEdgeIterator;
use super::quad_edge_mesh::QuadEdgeMesh;
use super::{Vertex, VertexId};
use crate::math;
use crate::point::{Point2, EPSILON, GEOMETRIC_EPSILON};
use crate::rect::Rect;

/// The error type returned by [DelaunayMesh::try_new] and [DelaunayMesh::try_insert_site].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum MeshError {
    /// A border vertex must have a negative id.
    BorderIdNotNegative(VertexId),

    /// The border vertices are not ordered counterclockwise or are collinear.
    BorderNotCounterClockwise,

    /// A vertex with this id is already part of the mesh.
    DuplicateVertexId(VertexId),

    /// Sites must have a non negative id, negative ids are reserved for the border.
    NegativeSiteId(VertexId),

    /// A coordinate was NaN or infinite.
    NonFinite,
}

impl Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::BorderIdNotNegative(id) => {
                write!(f, "border vertex has non negative id {}", id)
            }
            MeshError::BorderNotCounterClockwise => {
                write!(f, "border vertices are not in counterclockwise order")
            }
            MeshError::DuplicateVertexId(id) => write!(f, "vertex id {} is already in use", id),
            MeshError::NegativeSiteId(id) => write!(f, "site has negative id {}", id),
            MeshError::NonFinite => write!(f, "vertex has a non finite coordinate"),
        }
    }
}

impl Error for MeshError {}

/// Describes what [DelaunayMesh::insert_site] did with a site.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum InsertionOutcome {
    /// The site was added to the triangulation.
    Inserted,

    /// The site coincides with an existing vertex and was ignored. Contains the id of
    /// that vertex.
    Duplicate(VertexId),

    /// The site could not be located inside the border and was ignored.
    NotLocated,
}

/// An incrementally built Delaunay triangulation.
///
/// The mesh starts as a single border triangle made of three synthetic vertices with
/// negative ids. Every site must lie inside this triangle. Edges touching a border vertex
/// are called border edges, they are exempt from the Delaunay condition and are not
/// reported by [DelaunayMesh::neighbor_edges].
///
/// Sites are inserted one at a time with the Guibas-Stolfi algorithm: the site is located,
/// connected to the vertices of its containing triangle and the Delaunay condition is
/// restored by flipping edges. Vertices are never removed.
///
/// # Example
/// ```
/// use planar_kernel::{DelaunayMesh, InsertionOutcome, Point2, Vertex};
///
/// let mut mesh = DelaunayMesh::new(
///     Vertex::new(Point2::new(-100.0, -100.0), -1),
///     Vertex::new(Point2::new(100.0, -100.0), -2),
///     Vertex::new(Point2::new(0.0, 100.0), -3),
/// );
/// mesh.insert_site(Vertex::new(Point2::new(0.0, 0.0), 0));
/// mesh.insert_site(Vertex::new(Point2::new(10.0, 0.0), 1));
/// mesh.insert_site(Vertex::new(Point2::new(5.0, 10.0), 2));
/// let outcome = mesh.insert_site(Vertex::new(Point2::new(5.0, 10.0), 3));
/// assert_eq!(outcome, InsertionOutcome::Duplicate(2));
/// assert_eq!(mesh.neighbor_edges().count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DelaunayMesh {
    mesh: QuadEdgeMesh,
    border: [Point2; 3],
    border_edge: FixedEdgeHandle,
    hint: FixedEdgeHandle,
    ids: HashMap<VertexId, FixedVertexHandle>,
}

impl DelaunayMesh {
    /// Creates a mesh from three border vertices.
    ///
    /// # Panics
    /// Panics if any id is non negative or duplicated, or if the vertices are not ordered
    /// counterclockwise.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        match Self::try_new(a, b, c) {
            Ok(mesh) => mesh,
            Err(err) => panic!("Invalid border triangle: {}", err),
        }
    }

    pub fn try_new(a: Vertex, b: Vertex, c: Vertex) -> Result<Self, MeshError> {
        for vertex in [a, b, c] {
            if vertex.id >= 0 {
                return Err(MeshError::BorderIdNotNegative(vertex.id));
            }
            if !vertex.position.is_finite() {
                return Err(MeshError::NonFinite);
            }
        }
        if a.id == b.id || a.id == c.id {
            return Err(MeshError::DuplicateVertexId(a.id));
        }
        if b.id == c.id {
            return Err(MeshError::DuplicateVertexId(b.id));
        }
        if !math::side_query(a.position, b.position, c.position).is_on_left_side() {
            return Err(MeshError::BorderNotCounterClockwise);
        }

        let mut mesh = QuadEdgeMesh::new();
        let mut ids = HashMap::with_capacity(3);
        let [va, vb, vc] = [a, b, c].map(|vertex| {
            let handle = mesh.add_vertex(vertex);
            ids.insert(vertex.id, handle);
            handle
        });

        let ea = mesh.make_edge(va, vb);
        let eb = mesh.make_edge(vb, vc);
        mesh.splice(ea.sym(), eb);
        let ec = mesh.make_edge(vc, va);
        mesh.splice(eb.sym(), ec);
        mesh.splice(ec.sym(), ea);

        Ok(DelaunayMesh {
            mesh,
            border: [a.position, b.position, c.position],
            border_edge: ea,
            hint: ea,
            ids,
        })
    }

    /// Creates a mesh whose border triangle generously encloses `rect`.
    ///
    /// The border vertices get the ids `-1`, `-2` and `-3`. They are placed far away from
    /// `rect` so that the triangulation of the sites is barely affected by them.
    pub fn with_bounding_rect(rect: Rect) -> Self {
        debug_assert!(!rect.is_empty(), "cannot build a border around an empty rect");
        let center = rect.center();
        let size = 50.0 * rect.width().max(rect.height()).max(1.0);
        Self::new(
            Vertex::new(center.add(Point2::new(-2.0 * size, -size)), -1),
            Vertex::new(center.add(Point2::new(2.0 * size, -size)), -2),
            Vertex::new(center.add(Point2::new(0.0, 2.0 * size)), -3),
        )
    }

    /// Number of vertices, including the three border vertices.
    pub fn num_vertices(&self) -> usize {
        self.mesh.num_vertices()
    }

    /// Number of inserted sites.
    pub fn num_sites(&self) -> usize {
        self.mesh.num_vertices() - 3
    }

    /// Number of edges, including border edges.
    pub fn num_edges(&self) -> usize {
        self.mesh.num_live_edges()
    }

    /// Number of allocated quad edges, including deleted ones.
    pub fn num_quad_edges(&self) -> usize {
        self.mesh.num_quad_edges()
    }

    /// Looks up a vertex by its id. Border vertices can be looked up as well.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.ids
            .get(&id)
            .map(|handle| self.mesh.vertex_entry(*handle))
    }

    /// All vertices in insertion order, starting with the three border vertices.
    pub fn vertices(&self) -> &[Vertex] {
        self.mesh.vertices()
    }

    /// All inserted sites in insertion order.
    pub fn sites(&self) -> &[Vertex] {
        &self.mesh.vertices()[3..]
    }

    /// The border vertices, counterclockwise.
    pub fn border(&self) -> [Point2; 3] {
        self.border
    }

    /// Returns `true` if `point` lies inside the border triangle and keeps a distance of
    /// at least [GEOMETRIC_EPSILON] to its edges.
    pub fn is_inside_border(&self, point: Point2) -> bool {
        let [a, b, c] = self.border;
        [(a, b), (b, c), (c, a)]
            .iter()
            .all(|&(from, to)| math::signed_distance(from, to, point) > GEOMETRIC_EPSILON)
    }

    pub fn edge(&self, handle: FixedEdgeHandle) -> EdgeHandle<'_> {
        self.mesh.edge(handle)
    }

    /// All edges that were not deleted, including border edges.
    pub fn edges(&self) -> LiveEdgeIterator<'_> {
        self.mesh.live_edges()
    }

    /// All edges connecting two sites.
    pub fn neighbor_edges(&self) -> impl Iterator<Item = EdgeHandle<'_>> + '_ {
        self.edges().filter(|edge| !edge.is_border())
    }

    /// All triangles of the mesh, each reported once as its three vertices in
    /// counterclockwise order. Triangles touching the border are included.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        self.edges()
            .flat_map(|edge| [edge, edge.sym()])
            .filter_map(|edge| {
                let next = edge.lnext();
                let last = next.lnext();
                if last.lnext() != edge {
                    return None;
                }
                // Report each face only for its smallest edge handle.
                if next.fix() < edge.fix() || last.fix() < edge.fix() {
                    return None;
                }
                let [from, to] = edge.positions();
                if !math::side_query(from, to, next.to().position).is_on_left_side() {
                    // The outer face
                    return None;
                }
                Some([edge.from(), edge.to(), next.to()])
            })
    }

    /// Finds an edge whose closed left triangle contains `point`.
    ///
    /// If `point` coincides with a vertex, the returned edge starts or ends at that vertex.
    /// Returns `None` if the walk did not finish within as many steps as there are quad
    /// edges, which can happen for points outside the border.
    pub fn locate(&self, point: Point2) -> Option<EdgeHandle<'_>> {
        self.locate_fixed(point).map(|handle| self.mesh.edge(handle))
    }

    fn locate_fixed(&self, point: Point2) -> Option<FixedEdgeHandle> {
        let start = if self.mesh.is_deleted(self.hint) {
            self.border_edge
        } else {
            self.hint
        };
        let mut edge = self.mesh.edge(start);

        let max_steps = self.mesh.num_quad_edges();
        for _ in 0..max_steps {
            let [from, to] = edge.positions();
            if point == from || point == to {
                return Some(edge.fix());
            }
            if edge.is_right_of(point) {
                edge = edge.sym();
                continue;
            }
            let onext = edge.onext();
            if !onext.is_right_of(point) {
                edge = onext;
                continue;
            }
            let dprev = edge.dprev();
            if !dprev.is_right_of(point) {
                edge = dprev;
                continue;
            }
            return Some(edge.fix());
        }

        tracing::warn!(
            x = point.x,
            y = point.y,
            max_steps,
            "point location did not terminate"
        );
        None
    }

    /// Inserts a site into the triangulation.
    ///
    /// Sites that coincide with an existing vertex or lie outside the border are ignored,
    /// the returned [InsertionOutcome] tells which case occurred.
    ///
    /// # Panics
    /// Panics if the site has a negative id, an id that is already in use or a non finite
    /// position. Use [DelaunayMesh::try_insert_site] for untrusted input.
    pub fn insert_site(&mut self, site: Vertex) -> InsertionOutcome {
        match self.try_insert_site(site) {
            Ok(outcome) => outcome,
            Err(err) => panic!("Invalid site: {}", err),
        }
    }

    /// Like [DelaunayMesh::insert_site], but reports invalid sites instead of panicking.
    pub fn try_insert_site(&mut self, site: Vertex) -> Result<InsertionOutcome, MeshError> {
        if site.id < 0 {
            return Err(MeshError::NegativeSiteId(site.id));
        }
        if !site.position.is_finite() {
            return Err(MeshError::NonFinite);
        }
        if self.ids.contains_key(&site.id) {
            return Err(MeshError::DuplicateVertexId(site.id));
        }
        Ok(self.insert_valid_site(site))
    }

    fn insert_valid_site(&mut self, site: Vertex) -> InsertionOutcome {
        let x = site.position;
        if !self.is_inside_border(x) {
            tracing::warn!(id = site.id, x = x.x, y = x.y, "site outside of border, ignoring it");
            return InsertionOutcome::NotLocated;
        }

        let Some(mut e) = self.locate_fixed(x) else {
            tracing::warn!(id = site.id, x = x.x, y = x.y, "could not locate site, ignoring it");
            return InsertionOutcome::NotLocated;
        };

        let edge = self.mesh.edge(e);
        for existing in [edge.from(), edge.to()] {
            if existing.position == x {
                tracing::debug!(id = site.id, existing = existing.id, "ignoring duplicate site");
                return InsertionOutcome::Duplicate(existing.id);
            }
        }

        if is_on_edge(edge, x) {
            // Remove the edge, x then lies inside the quadrilateral of its two triangles.
            e = self.mesh.oprev(e);
            let on_edge = self.mesh.onext(e);
            self.mesh.delete_edge(on_edge);
        }

        let vertex = self.mesh.add_vertex(site);
        self.ids.insert(site.id, vertex);

        // Connect x to every vertex of its surrounding polygon.
        let org = self.mesh.origin(e);
        let mut base = self.mesh.make_edge(org, vertex);
        self.mesh.splice(base, e);
        let start = base;
        loop {
            base = self.mesh.connect(e, base.sym());
            e = self.mesh.oprev(base);
            if self.mesh.lnext(e) == start {
                break;
            }
        }

        // The edges opposite of x are the only ones that can violate the Delaunay
        // condition. Each flip adds two more suspects.
        loop {
            let t = self.mesh.oprev(e);
            let edge = self.mesh.edge(e);
            let [from, to] = edge.positions();
            let opposite = self.mesh.edge(t).to().position;
            if edge.is_right_of(opposite)
                && math::contained_in_circumference(from, opposite, to, x)
            {
                self.mesh.swap(e);
                e = self.mesh.oprev(e);
            } else if self.mesh.onext(e) == start {
                break;
            } else {
                e = self.mesh.lprev(self.mesh.onext(e));
            }
        }

        self.hint = start;
        InsertionOutcome::Inserted
    }

    /// Returns the site closest to `point`, or `None` if no site was inserted yet.
    ///
    /// Locates `point` and walks greedily towards closer vertices. In a Delaunay
    /// triangulation this walk ends at the nearest vertex.
    pub fn nearest_vertex(&self, point: Point2) -> Option<&Vertex> {
        if self.num_sites() == 0 {
            return None;
        }

        let start = match self.locate(point) {
            Some(edge) => edge,
            None => self.mesh.edge(self.border_edge),
        };
        let mut current = if start.from().position.distance_2(point)
            <= start.to().position.distance_2(point)
        {
            start
        } else {
            start.sym()
        };
        let mut current_distance = current.from().position.distance_2(point);

        'walk: loop {
            for out_edge in current.out_edges() {
                let distance = out_edge.to().position.distance_2(point);
                if distance < current_distance {
                    current = out_edge.sym();
                    current_distance = distance;
                    continue 'walk;
                }
            }
            break;
        }

        let nearest = current.from();
        if !nearest.is_border() {
            return Some(nearest);
        }
        // A border vertex is closer than any site. This only happens for points far
        // outside of the sites' bounding box.
        self.sites().iter().min_by(|a, b| {
            a.position
                .distance_2(point)
                .total_cmp(&b.position.distance_2(point))
        })
    }

    /// Checks the mesh's topology, Euler's formula and the Delaunay property.
    #[cfg(test)]
    pub fn sanity_check(&self) {
        self.mesh.sanity_check();
        assert_eq!(self.ids.len(), self.num_vertices());
        for (id, handle) in &self.ids {
            assert_eq!(self.mesh.vertex_entry(*handle).id, *id);
        }

        let mut num_faces = 0;
        let mut num_outer_faces = 0;
        for edge in self.edges().flat_map(|edge| [edge, edge.sym()]) {
            let face: Vec<_> = edge.face_edges().collect();
            assert_eq!(face.len(), 3, "face is not a triangle");
            if face.iter().any(|other| other.fix() < edge.fix()) {
                continue;
            }
            num_faces += 1;
            let [from, to] = edge.positions();
            let apex = face[1].to().position;
            if !math::side_query(from, to, apex).is_on_left_side() {
                num_outer_faces += 1;
            }
        }
        assert_eq!(num_outer_faces, 1);
        assert_eq!(num_faces - 1, self.triangles().count());

        // Euler's formula for a connected planar graph.
        let num_vertices = self.num_vertices() as isize;
        let num_edges = self.edges().count() as isize;
        assert_eq!(num_vertices - num_edges + num_faces as isize, 2);

        for edge in self.edges() {
            let left = edge.lnext().to().position;
            let right = edge.sym().lnext().to().position;
            let [from, to] = edge.positions();
            if !math::side_query(from, to, left).is_on_left_side()
                || !math::side_query(from, to, right).is_on_right_side()
            {
                // Borders the outer face.
                continue;
            }
            assert!(
                !math::contained_in_circumference(from, to, left, right),
                "Delaunay property violated at {:?}",
                edge
            );
        }
    }
}

/// Returns `true` if `point` lies on the edge, strictly between its end points.
fn is_on_edge(edge: EdgeHandle, point: Point2) -> bool {
    let [from, to] = edge.positions();
    let on_line = math::side_query(from, to, point).is_on_line()
        || math::side_query_with_tolerance(from, to, point, EPSILON).is_on_line();
    if !on_line {
        return false;
    }
    let position = math::project_point(from, to, point).relative_position();
    position > 0.0 && position < 1.0
}
