use std::ops::{Deref, DerefMut};

use crate::core::AdjacencyBits;

use super::Search;

/// Edge between a vertex and the new vertex, applied to the live snapshot for
/// as long as the guard exists.
///
/// Dropping the guard removes the edge again and restores the degrees, the
/// distances, the maximum degree and the neighbor list, so that every exit
/// from a branch (including an early return of a stopped search) leaves the
/// search state exactly as it was before the branch.
pub(super) struct EdgeGuard<'s, A: AdjacencyBits, F> {
    search: &'s mut Search<A, F>,
    vertex: usize,
    prev_max_degree: usize,
}

impl<'s, A: AdjacencyBits, F> EdgeGuard<'s, A, F> {
    pub fn apply(search: &'s mut Search<A, F>, vertex: usize) -> Self {
        let prev_max_degree = search.live.connect_last(vertex);
        search.neighbors.push(vertex);

        Self {
            search,
            vertex,
            prev_max_degree,
        }
    }

    /// Whether both endpoints respect the degree bound.
    pub fn within_bound(&self) -> bool {
        let live = &self.search.live;
        let bound = self.search.bound;

        live.degree(self.vertex) <= bound && live.degree(live.last_vertex()) <= bound
    }
}

impl<A: AdjacencyBits, F> Deref for EdgeGuard<'_, A, F> {
    type Target = Search<A, F>;

    fn deref(&self) -> &Self::Target {
        self.search
    }
}

impl<A: AdjacencyBits, F> DerefMut for EdgeGuard<'_, A, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.search
    }
}

impl<A: AdjacencyBits, F> Drop for EdgeGuard<'_, A, F> {
    fn drop(&mut self) {
        let popped = self.search.neighbors.pop();
        debug_assert_eq!(popped, Some(self.vertex));

        self.search
            .live
            .disconnect_last(self.vertex, self.prev_max_degree);
    }
}
