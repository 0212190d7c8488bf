use std::marker::PhantomData;
use std::ops::Range;

use super::handles::{EdgeHandle, FixedEdgeHandle};
use super::quad_edge_mesh::QuadEdgeMesh;

/// Iterates over all quad edges that were not deleted. Yields the primal edge of each
/// quad edge, its reverse is not reported.
pub struct LiveEdgeIterator<'a> {
    mesh: &'a QuadEdgeMesh,
    range: Range<usize>,
}

impl<'a> LiveEdgeIterator<'a> {
    pub(super) fn new(mesh: &'a QuadEdgeMesh) -> Self {
        LiveEdgeIterator {
            mesh,
            range: 0..mesh.num_quad_edges(),
        }
    }

    fn live(&self, index: usize) -> Option<EdgeHandle<'a>> {
        let handle = FixedEdgeHandle::new(index, 0);
        if self.mesh.is_deleted(handle) {
            None
        } else {
            Some(self.mesh.edge(handle))
        }
    }
}

impl<'a> Iterator for LiveEdgeIterator<'a> {
    type Item = EdgeHandle<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.range.next() {
            if let Some(edge) = self.live(index) {
                return Some(edge);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.range.len()))
    }
}

impl DoubleEndedIterator for LiveEdgeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.range.next_back() {
            if let Some(edge) = self.live(index) {
                return Some(edge);
            }
        }
        None
    }
}

pub trait NextBackFn {
    fn next<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a>;

    fn next_back<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a>;
}

/// Walks the `onext` ring: all edges leaving the same origin, counterclockwise.
pub struct OriginRing;

impl NextBackFn for OriginRing {
    fn next<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a> {
        edge.onext()
    }

    fn next_back<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a> {
        edge.oprev()
    }
}

/// Walks the `lnext` ring: all edges bounding the same left face, counterclockwise.
pub struct FaceRing;

impl NextBackFn for FaceRing {
    fn next<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a> {
        edge.lnext()
    }

    fn next_back<'a>(edge: EdgeHandle<'a>) -> EdgeHandle<'a> {
        edge.lprev()
    }
}

pub struct CircularIterator<'a, NB> {
    current_handle: EdgeHandle<'a>,
    final_handle: EdgeHandle<'a>,
    iteration_finished: bool,
    next_back_fn: PhantomData<NB>,
}

pub type OutEdgesIterator<'a> = CircularIterator<'a, OriginRing>;
pub type FaceEdgesIterator<'a> = CircularIterator<'a, FaceRing>;

impl<'a, NB: NextBackFn> CircularIterator<'a, NB> {
    pub fn new(start_edge: EdgeHandle<'a>) -> Self {
        CircularIterator {
            current_handle: start_edge,
            final_handle: start_edge,
            iteration_finished: false,
            next_back_fn: PhantomData,
        }
    }
}

impl<'a, NB: NextBackFn> Iterator for CircularIterator<'a, NB> {
    type Item = EdgeHandle<'a>;

    fn next(&mut self) -> Option<EdgeHandle<'a>> {
        if self.iteration_finished {
            return None;
        }
        let result = self.current_handle;
        self.current_handle = NB::next(self.current_handle);
        if self.current_handle == self.final_handle {
            self.iteration_finished = true;
        }
        Some(result)
    }
}

impl<'a, NB: NextBackFn> DoubleEndedIterator for CircularIterator<'a, NB> {
    fn next_back(&mut self) -> Option<EdgeHandle<'a>> {
        if self.iteration_finished {
            return None;
        }
        self.final_handle = NB::next_back(self.final_handle);
        if self.current_handle == self.final_handle {
            self.iteration_finished = true;
        }
        Some(self.final_handle)
    }
}
