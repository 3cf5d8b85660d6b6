//! One node of the search tree: a graph together with its distances and
//! degree bookkeeping.

use tracing::debug;

use crate::algo::{
    metrics::Metrics,
    shortest_paths::{floyd_warshall, settle_last_vertex},
};

use super::{
    bits::{AdjacencyBits, BitGraph, GrowAdjacency},
    distance::{DistanceMatrix, INF},
    error::InputError,
};

/// A graph with its distance matrix, degree sequence, maximum degree and edge
/// count.
///
/// For distinct `i` and `j`, the adjacency has the edge `(i, j)` exactly when
/// `distances.get(i, j) == 1`. `degrees`, `max_degree` and `edge_count` always
/// describe the adjacency. The distances are exact shortest path lengths
/// ("settled") for snapshots produced by [`from_graph`](Snapshot::from_graph)
/// and for leaves handed out by the enumeration; an [`extend`](Snapshot::extend)ed
/// snapshot is settled except for the rows of the last vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<A = BitGraph> {
    distances: DistanceMatrix,
    degrees: Vec<usize>,
    max_degree: usize,
    edge_count: usize,
    adjacency: A,
}

impl<A> Snapshot<A> {
    pub fn vertex_count(&self) -> usize {
        self.degrees.len()
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub fn degree(&self, v: usize) -> usize {
        self.degrees[v]
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    pub fn into_adjacency(self) -> A {
        self.adjacency
    }

    /// Index of the most recently added vertex.
    pub fn last_vertex(&self) -> usize {
        self.vertex_count() - 1
    }

    /// Diameter and distance sum of the (settled) distances, `None` if the
    /// graph is disconnected.
    pub fn metrics(&self) -> Option<Metrics> {
        Metrics::of(&self.distances)
    }
}

impl<A: AdjacencyBits> Snapshot<A> {
    /// Builds a settled snapshot of a base graph.
    ///
    /// The adjacency must describe a non-empty simple undirected graph.
    pub fn from_graph(adjacency: A) -> Result<Self, InputError> {
        let n = adjacency.vertex_count();
        if n == 0 {
            return Err(InputError::Empty);
        }

        for i in 0..n {
            if adjacency.has_edge(i, i) {
                return Err(InputError::SelfLoop(i));
            }

            for j in (i + 1)..n {
                if adjacency.has_edge(i, j) != adjacency.has_edge(j, i) {
                    return Err(InputError::Asymmetric(i, j));
                }
            }
        }

        let degrees = (0..n).map(|v| adjacency.degree(v)).collect::<Vec<_>>();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let edge_count = degrees.iter().sum::<usize>() / 2;

        let mut distances = DistanceMatrix::from_adjacency(&adjacency);
        floyd_warshall(&mut distances);

        debug!(vertices = n, edges = edge_count, max_degree, "base graph solved");

        Ok(Self {
            distances,
            degrees,
            max_degree,
            edge_count,
            adjacency,
        })
    }

    /// Computes the distances of the last vertex and relaxes all other pairs
    /// through it.
    ///
    /// All distances among the other vertices must already be settled and the
    /// row of the last vertex must hold only its direct edges, as left by
    /// [`connect_last`](Snapshot::connect_last).
    pub(crate) fn settle(&mut self) {
        settle_last_vertex(&mut self.distances);
    }

    /// Adds the edge between `v` and the last vertex.
    ///
    /// Returns the maximum degree before the change, which
    /// [`disconnect_last`](Snapshot::disconnect_last) needs to undo it.
    pub(crate) fn connect_last(&mut self, v: usize) -> usize {
        let last = self.last_vertex();
        debug_assert!(v < last);
        debug_assert!(!self.adjacency.has_edge(v, last), "edge ({v}, {last}) already present");

        let prev_max_degree = self.max_degree;

        self.adjacency.add_edge(v, last);
        self.distances.set(v, last, 1);
        self.degrees[v] += 1;
        self.degrees[last] += 1;
        self.edge_count += 1;
        self.max_degree = prev_max_degree
            .max(self.degrees[v])
            .max(self.degrees[last]);

        prev_max_degree
    }

    /// Exact inverse of [`connect_last`](Snapshot::connect_last).
    pub(crate) fn disconnect_last(&mut self, v: usize, prev_max_degree: usize) {
        let last = self.last_vertex();
        debug_assert!(self.adjacency.has_edge(v, last), "edge ({v}, {last}) missing");

        self.adjacency.remove_edge(v, last);
        self.distances.set(v, last, INF);
        self.degrees[v] -= 1;
        self.degrees[last] -= 1;
        self.edge_count -= 1;
        self.max_degree = prev_max_degree;
    }
}

impl<A: GrowAdjacency> Snapshot<A> {
    /// Appends an isolated vertex.
    ///
    /// Distances, degrees and adjacency of the existing vertices are copied,
    /// the new vertex is unreachable from all others, and the maximum degree
    /// and edge count do not change.
    pub fn extend(&self) -> Self {
        let mut degrees = Vec::with_capacity(self.degrees.len() + 1);
        degrees.extend_from_slice(&self.degrees);
        degrees.push(0);

        Self {
            distances: self.distances.extended(),
            degrees,
            max_degree: self.max_degree,
            edge_count: self.edge_count,
            adjacency: self.adjacency.grown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{algo::shortest_paths::floyd_warshall, infra::testing::check_consistency};

    use super::*;

    fn path3() -> Snapshot {
        Snapshot::from_graph(BitGraph::from_edges(3, [(0, 1), (1, 2)])).unwrap()
    }

    #[test]
    fn from_graph_settles() {
        let snapshot = path3();

        assert_eq!(snapshot.distances().get(0, 1), 1);
        assert_eq!(snapshot.distances().get(1, 2), 1);
        assert_eq!(snapshot.distances().get(0, 2), 2);
        assert_eq!(snapshot.degrees(), &[1, 2, 1]);
        assert_eq!(snapshot.max_degree(), 2);
        assert_eq!(snapshot.edge_count(), 2);
        assert_matches!(check_consistency(&snapshot), Ok(()));
    }

    #[test]
    fn from_graph_single_vertex() {
        let snapshot = Snapshot::from_graph(BitGraph::new(1)).unwrap();

        assert_eq!(snapshot.vertex_count(), 1);
        assert_eq!(snapshot.max_degree(), 0);
        assert_eq!(snapshot.edge_count(), 0);
    }

    #[test]
    fn from_graph_rejects_empty() {
        assert_matches!(
            Snapshot::from_graph(BitGraph::new(0)),
            Err(InputError::Empty)
        );
    }

    #[test]
    fn from_graph_rejects_self_loop() {
        let graph = BitGraph::from_words(2, &[1u64 << 62 | 1 << 63, 1 << 63]).unwrap();

        assert_matches!(Snapshot::from_graph(graph), Err(InputError::SelfLoop(0)));
    }

    #[test]
    fn from_graph_rejects_asymmetric() {
        let graph = BitGraph::from_words(3, &[0, 1u64 << 61, 0]).unwrap();

        assert_matches!(
            Snapshot::from_graph(graph),
            Err(InputError::Asymmetric(1, 2))
        );
    }

    #[test]
    fn extend_appends_isolated_vertex() {
        let base = path3();
        let extended = base.extend();

        assert_eq!(extended.vertex_count(), 4);
        assert_eq!(extended.degrees(), &[1, 2, 1, 0]);
        assert_eq!(extended.max_degree(), base.max_degree());
        assert_eq!(extended.edge_count(), base.edge_count());
        assert_eq!(extended.distances().row(3), &[INF, INF, INF, 0]);

        for i in 0..3 {
            assert_eq!(extended.distances().row(i)[..3], *base.distances().row(i));
        }

        assert_matches!(check_consistency(&extended), Ok(()));
    }

    #[test]
    fn connect_disconnect_restores() {
        let base = path3();
        let mut live = base.extend();
        let before = live.clone();

        let prev1 = live.connect_last(1);
        assert_eq!(live.degrees(), &[1, 3, 1, 1]);
        assert_eq!(live.max_degree(), 3);
        assert_eq!(live.edge_count(), 3);
        assert_eq!(live.distances().get(1, 3), 1);
        assert!(live.adjacency().has_edge(3, 1));
        assert_matches!(check_consistency(&live), Ok(()));

        let prev2 = live.connect_last(0);
        assert_eq!(live.max_degree(), 3);

        live.disconnect_last(0, prev2);
        live.disconnect_last(1, prev1);

        assert_eq!(live, before);
    }

    #[test]
    fn settle_path_extension() {
        let mut live = path3().extend();
        live.connect_last(0);
        live.settle();

        let distances = live.distances();
        assert_eq!(distances.get(3, 0), 1);
        assert_eq!(distances.get(3, 1), 2);
        assert_eq!(distances.get(3, 2), 3);

        let metrics = live.metrics().unwrap();
        assert_eq!(metrics.diameter, 3);
        assert_eq!(metrics.distance_sum, 10);
    }

    #[test]
    fn settle_agrees_with_full_recomputation() {
        let base = Snapshot::from_graph(BitGraph::from_edges(
            6,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)],
        ))
        .unwrap();

        let mut live = base.extend();
        live.connect_last(0);
        live.connect_last(5);

        let mut full = DistanceMatrix::from_adjacency(live.adjacency());
        floyd_warshall(&mut full);

        live.settle();
        assert_eq!(live.distances(), &full);
    }
}
