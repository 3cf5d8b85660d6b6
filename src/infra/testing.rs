use thiserror::Error;

use crate::core::{AdjacencyBits, BitGraph, Snapshot};

pub fn create_path(vertex_count: usize) -> BitGraph {
    BitGraph::from_edges(vertex_count, (1..vertex_count).map(|v| (v - 1, v)))
}

pub fn create_cycle(vertex_count: usize) -> BitGraph {
    assert!(vertex_count >= 3, "cycle needs at least three vertices");

    let mut graph = create_path(vertex_count);
    graph.add_edge(vertex_count - 1, 0);
    graph
}

pub fn create_complete(vertex_count: usize) -> BitGraph {
    BitGraph::from_edges(
        vertex_count,
        (0..vertex_count).flat_map(|u| ((u + 1)..vertex_count).map(move |v| (u, v))),
    )
}

/// The Petersen graph: 3-regular, diameter 2, ten vertices.
pub fn petersen() -> BitGraph {
    let outer = (0..5).map(|v| (v, (v + 1) % 5));
    let spokes = (0..5).map(|v| (v, v + 5));
    let inner = (0..5).map(|v| (v + 5, (v + 2) % 5 + 5));

    BitGraph::from_edges(10, outer.chain(spokes).chain(inner))
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("distance matrix has {0} vertices, degree sequence has {1}")]
    VertexCountMismatch(usize, usize),
    #[error("adjacency has {0} vertices, degree sequence has {1}")]
    AdjacencyVertexCountMismatch(usize, usize),
    #[error("distance of vertex {0} to itself is {1}")]
    NonZeroDiagonal(usize, u32),
    #[error("distances ({0}, {1}) and ({1}, {0}) differ")]
    Asymmetric(usize, usize),
    #[error("pair ({0}, {1}) is at distance {2} but adjacency says {3}")]
    AdjacencyDistanceMismatch(usize, usize, u32, bool),
    #[error("degree of vertex {0} is {1} but it has {2} neighbors")]
    DegreeMismatch(usize, usize, usize),
    #[error("maximum degree is {0} but the largest degree is {1}")]
    MaxDegreeMismatch(usize, usize),
    #[error("edge count is {0} but half of the degree sum is {1}")]
    HandshakingLemma(usize, usize),
}

/// Checks that all parts of a snapshot describe the same graph.
pub fn check_consistency<A: AdjacencyBits>(
    snapshot: &Snapshot<A>,
) -> Result<(), ConsistencyCheckError> {
    let n = snapshot.vertex_count();
    let distances = snapshot.distances();
    let adjacency = snapshot.adjacency();

    if distances.vertex_count() != n {
        return Err(ConsistencyCheckError::VertexCountMismatch(
            distances.vertex_count(),
            n,
        ));
    }

    if adjacency.vertex_count() != n {
        return Err(ConsistencyCheckError::AdjacencyVertexCountMismatch(
            adjacency.vertex_count(),
            n,
        ));
    }

    for i in 0..n {
        let dist = distances.get(i, i);
        if dist != 0 {
            return Err(ConsistencyCheckError::NonZeroDiagonal(i, dist));
        }
    }

    for (i, j, dist) in distances.pairs() {
        if distances.get(j, i) != dist {
            return Err(ConsistencyCheckError::Asymmetric(i, j));
        }

        let adjacent = adjacency.has_edge(i, j);
        if adjacent != (dist == 1) || adjacent != adjacency.has_edge(j, i) {
            return Err(ConsistencyCheckError::AdjacencyDistanceMismatch(
                i, j, dist, adjacent,
            ));
        }
    }

    for v in 0..n {
        let neighbors = (0..n).filter(|&u| u != v && adjacency.has_edge(v, u)).count();
        if snapshot.degree(v) != neighbors {
            return Err(ConsistencyCheckError::DegreeMismatch(
                v,
                snapshot.degree(v),
                neighbors,
            ));
        }
    }

    let max_degree = snapshot.degrees().iter().copied().max().unwrap_or(0);
    if snapshot.max_degree() != max_degree {
        return Err(ConsistencyCheckError::MaxDegreeMismatch(
            snapshot.max_degree(),
            max_degree,
        ));
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    let deg_sum = snapshot.degrees().iter().sum::<usize>();
    if 2 * snapshot.edge_count() != deg_sum {
        return Err(ConsistencyCheckError::HandshakingLemma(
            snapshot.edge_count(),
            deg_sum / 2,
        ));
    }

    Ok(())
}
